//! Build script for speedtest-simulator
//!
//! On Windows, links against the SDL2 import library in `vendor/sdl2/` at the
//! workspace root and copies `SDL2.dll` next to the built binary. Other platforms
//! use the system SDL2.

use std::path::{Path, PathBuf};
use std::{env, fs};

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        return;
    };
    let manifest_dir = PathBuf::from(manifest_dir);
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let vendor_sdl2 = workspace_root.join("vendor").join("sdl2");

    println!("cargo:rerun-if-changed={}", vendor_sdl2.display());

    if !vendor_sdl2.exists() {
        println!(
            "cargo:warning=SDL2 vendor directory not found at {}",
            vendor_sdl2.display()
        );
        println!("cargo:warning=Place SDL2.lib and SDL2.dll in vendor/sdl2/ at the workspace root");
        return;
    }

    println!("cargo:rustc-link-search=native={}", vendor_sdl2.display());

    if let Some(target_dir) = profile_dir() {
        copy_dll(&vendor_sdl2, &target_dir);
    }
}

/// `target/<profile>`, found by walking up from `OUT_DIR`
/// (`target/<profile>/build/speedtest-simulator-<hash>/out`).
fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").ok()?);
    out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
        .map(Path::to_path_buf)
}

fn copy_dll(
    vendor_sdl2: &Path,
    target_dir: &Path,
) {
    let dll_src = vendor_sdl2.join("SDL2.dll");
    let dll_dst = target_dir.join("SDL2.dll");

    if !dll_src.exists() || dll_dst.exists() {
        return;
    }

    match fs::copy(&dll_src, &dll_dst) {
        Ok(_) => println!("cargo:warning=Copied SDL2.dll to {}", dll_dst.display()),
        Err(e) => println!("cargo:warning=Failed to copy SDL2.dll: {e}"),
    }
}
