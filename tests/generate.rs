//! End-to-end generation into scratch directories.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use mipmap_icons::{Batch, Density, IconProfile, IconVariant, Palette, generate_all};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "mipmap-icons-it-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn files_under(dir: &Path) -> BTreeSet<PathBuf> {
    let mut files = BTreeSet::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in std::fs::read_dir(&current).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                files.insert(path.strip_prefix(dir).unwrap().to_path_buf());
            }
        }
    }
    files
}

#[test]
fn writes_exactly_ten_icons() {
    let dir = scratch_dir("ten");
    let report = generate_all(&dir).unwrap();
    assert_eq!(report.len(), 10);

    let expected: BTreeSet<PathBuf> = Density::ALL
        .into_iter()
        .flat_map(|d| {
            IconVariant::ALL
                .into_iter()
                .map(move |v| PathBuf::from(format!("mipmap-{}", d.name())).join(v.file_name()))
        })
        .collect();
    assert_eq!(files_under(&dir), expected);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn icons_decode_at_density_size() {
    let dir = scratch_dir("decode");
    generate_all(&dir).unwrap();

    for density in Density::ALL {
        for variant in IconVariant::ALL {
            let path = variant.path(&dir, density);
            let img = image::open(&path).unwrap();
            assert_eq!(
                (img.width(), img.height()),
                (density.size(), density.size()),
                "{}",
                path.display()
            );
            assert!(img.color().has_alpha(), "{}", path.display());
        }
    }

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn second_run_is_byte_identical() {
    let dir = scratch_dir("idempotent");
    let first = generate_all(&dir).unwrap();
    let before: Vec<Vec<u8>> = first.paths().map(|p| std::fs::read(p).unwrap()).collect();

    let second = generate_all(&dir).unwrap();
    let after: Vec<Vec<u8>> = second.paths().map(|p| std::fs::read(p).unwrap()).collect();

    assert_eq!(first, second);
    assert_eq!(before, after);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn round_variant_matches_standard() {
    let dir = scratch_dir("round");
    generate_all(&dir).unwrap();

    for density in Density::ALL {
        let standard = std::fs::read(IconVariant::Standard.path(&dir, density)).unwrap();
        let round = std::fs::read(IconVariant::Round.path(&dir, density)).unwrap();
        assert_eq!(standard, round, "{density}");
    }

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn profile_palette_reaches_the_pixels() {
    let dir = scratch_dir("profile");
    let json = format!(
        r##"{{ "baseDir": {}, "background": "#102030", "foreground": "#ff8000" }}"##,
        serde_json::to_string(&dir).unwrap()
    );
    let profile = IconProfile::from_json(&json).unwrap();
    assert_ne!(profile.palette(), Palette::default());

    let report = Batch::from_profile(&profile).run().unwrap();
    assert_eq!(report.len(), 10);

    let img = image::open(IconVariant::Standard.path(&dir, Density::Mdpi))
        .unwrap()
        .into_rgba8();
    assert_eq!(img.get_pixel(3, 24).0, [0x10, 0x20, 0x30, 255]);
    assert_eq!(img.get_pixel(10, 24).0, [0xff, 0x80, 0x00, 255]);
    assert_eq!(img.get_pixel(0, 0)[3], 0);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn written_files_match_in_memory_render() {
    let dir = scratch_dir("memory");
    let batch = Batch::new(&dir);
    batch.run().unwrap();

    let set = batch.render_set().unwrap();
    for icon in &set {
        let on_disk = std::fs::read(IconVariant::Standard.path(&dir, icon.density)).unwrap();
        assert_eq!(icon.encode_png().unwrap(), on_disk, "{}", icon.density);
    }

    std::fs::remove_dir_all(&dir).unwrap();
}
