use std::path::Path;
use std::process::Command;

fn main() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let tailwind_input = Path::new(manifest_dir).join("tailwind.css");
    let tailwind_output = Path::new(manifest_dir).join("assets/tailwind.css");
    println!("cargo:rerun-if-changed={}", tailwind_input.display());
    println!(
        "cargo:rerun-if-changed={}",
        Path::new(manifest_dir).join("tailwind.config.js").display(),
    );
    println!(
        "cargo:rerun-if-changed={}",
        Path::new(manifest_dir).join("../article-ui/src").display(),
    );

    let output = Command::new("npx")
        .arg("tailwindcss")
        .arg("-i")
        .arg(&tailwind_input)
        .arg("-o")
        .arg(&tailwind_output)
        .arg("--minify")
        .current_dir(manifest_dir)
        .output();
    match output {
        Ok(output) => {
            if !output.status.success() {
                println!("cargo:warning=Failed to generate Tailwind CSS");
                println!(
                    "cargo:warning=STDERR: {}",
                    String::from_utf8_lossy(&output.stderr),
                );
            }
        }
        Err(e) => {
            println!("cargo:warning=Failed to run tailwindcss: {}", e);
        }
    }

    // asset!() needs the file to exist at compile time
    if !tailwind_output.exists() {
        if let Err(e) = std::fs::write(&tailwind_output, "") {
            println!("cargo:warning=Could not create {}: {}", tailwind_output.display(), e);
        }
    }
}
