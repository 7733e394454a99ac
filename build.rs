use std::env;

fn main() {
    // `InfiniInt` stores machine words. Unless a feature forces the digit width,
    // pick it from the target (not the host this script runs on).
    if env::var_os("CARGO_FEATURE_U32").is_some() || env::var_os("CARGO_FEATURE_U64").is_some() {
        return;
    }
    match env::var("CARGO_CFG_TARGET_POINTER_WIDTH").as_deref() {
        Ok("64") => println!("cargo:rustc-cfg=feature=\"u64\""),
        _ => println!("cargo:rustc-cfg=feature=\"u32\""),
    }
}
