#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_step(&outdir_path, "default_step.rs")?;
    Ok(())
}

/// Create default_step.rs, containing definition of constant DEFAULT_STEP
fn write_default_step(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{

    let default_step = env::var("RUST_LEXORANK_DEFAULT_STEP")
        .map(|s| s.parse::<std::num::NonZeroU32>().expect("$RUST_LEXORANK_DEFAULT_STEP must be an integer > 0"))
        .map(|nz_num| nz_num.into())
        .unwrap_or(8u32);

    let default_step_rs_path = outdir_path.join(filename);

    let default_step = format!("const DEFAULT_STEP: u64 = {default_step};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&default_step_rs_path) {
        Ok(existing_contents) if existing_contents == default_step => {},
        _ => {
            let mut default_step_rs = File::create(&default_step_rs_path)
                .expect("Could not create default_step.rs");
            write!(default_step_rs, "{default_step}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", default_step_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_LEXORANK_DEFAULT_STEP");

    Ok(())
}
