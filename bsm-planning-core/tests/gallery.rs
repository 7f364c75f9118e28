use std::fs;

use bsm_planning_core::{scan_gallery, write_image_list};
use tempfile::TempDir;

#[test]
fn collects_images_recursively_with_site_relative_paths() {
    let tmp = TempDir::new().unwrap();
    let gallery = tmp.path().join("public").join("gallery");
    fs::create_dir_all(gallery.join("tournoi")).unwrap();
    fs::write(gallery.join("equipe.jpg"), b"").unwrap();
    fs::write(gallery.join("notes.txt"), b"").unwrap();
    fs::write(gallery.join("tournoi").join("finale.PNG"), b"").unwrap();

    let images = scan_gallery(&gallery).unwrap();
    assert_eq!(
        images,
        vec!["/gallery/equipe.jpg", "/gallery/tournoi/finale.PNG"]
    );
}

#[test]
fn entries_are_sorted_per_directory() {
    let tmp = TempDir::new().unwrap();
    let gallery = tmp.path().join("gallery");
    fs::create_dir_all(&gallery).unwrap();
    fs::write(gallery.join("b.png"), b"").unwrap();
    fs::write(gallery.join("a.png"), b"").unwrap();
    fs::write(gallery.join("c.webp"), b"").unwrap();

    let images = scan_gallery(&gallery).unwrap();
    assert_eq!(images, vec!["/gallery/a.png", "/gallery/b.png", "/gallery/c.webp"]);
}

#[test]
fn empty_gallery_yields_empty_list() {
    let tmp = TempDir::new().unwrap();
    let gallery = tmp.path().join("gallery");
    fs::create_dir_all(&gallery).unwrap();

    assert!(scan_gallery(&gallery).unwrap().is_empty());
}

#[test]
fn image_list_writes_pretty_json_array() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("public").join("gallery-images.json");

    let images = vec!["/gallery/a.png".to_string(), "/gallery/b.jpg".to_string()];
    write_image_list(&out, &images).unwrap();

    let loaded: Vec<String> =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(loaded, images);
}
