use cbindgen::Config;
use std::env;

fn main() {
    println!("cargo:rerun-if-changed=src/ffi.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let Ok(crate_dir) = env::var("CARGO_MANIFEST_DIR") else {
        println!("cargo:warning=CARGO_MANIFEST_DIR is not set; skipping header generation");
        return;
    };
    let config = Config::from_file("cbindgen.toml").unwrap_or_default();

    // 헤더 생성 실패는 라이브러리 빌드를 막지 않습니다.
    match cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_config(config)
        .generate()
    {
        Ok(bindings) => {
            bindings.write_to_file("include/montmul.h");
        }
        Err(e) => println!("cargo:warning=unable to generate C bindings: {e}"),
    }
}
