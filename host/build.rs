use std::fs;
use std::path::Path;

// Mirrors the trunk output into `static/dist` so `include_dir!` can embed it.
// The directory always exists, empty when the frontend has not been built.
fn main() {
    let out_dir = Path::new("static/dist");
    let dist_dir = Path::new("../frontend/dist");

    let _ = fs::remove_dir_all(out_dir);
    fs::create_dir_all(out_dir).unwrap();

    if dist_dir.exists() {
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).content_only(true),
        )
            .unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
