use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("could not create static/");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("could not copy the frontend build into static/");
    }

    // The SPA is embedded with include_dir!, which needs the directory even
    // before the frontend has been built.
    fs::create_dir_all(out_dir.join("dist")).expect("could not create static/dist");

    println!("cargo:rerun-if-changed=../frontend/dist");
}
