use std::error::Error;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir)?;
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )?;
    }

    // The embedded directory must exist even before the dashboard has been built
    // with `trunk build`; the server then answers 404 for the UI and still proxies.
    fs::create_dir_all(out_dir.join("dist"))?;

    println!("cargo:rerun-if-changed=../frontend/dist");
    Ok(())
}
