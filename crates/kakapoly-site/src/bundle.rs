//! Per-set zip archive offered as "Download Icons".

use std::collections::HashSet;
use std::io::{Cursor, Write};

use zip::result::ZipResult;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use kakapoly_core::{Icon, IconSet};

use crate::svg::download_name;

/// File name of the archive for `icon_set`, e.g. `feather.zip`.
pub fn bundle_name(icon_set: &IconSet) -> String {
    format!("{}.zip", icon_set.slug)
}

pub fn bundle_href(icon_set: &IconSet) -> String {
    format!("/icon-sets/{}/{}", icon_set.slug, bundle_name(icon_set))
}

/// Zip every icon as `<name>.svg`, in the order given.
///
/// Packs imported from several directories can repeat a file name; later
/// entries get a `-2`, `-3`, ... suffix so none is lost.
pub fn bundle_icons(icons: &[Icon]) -> ZipResult<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    let mut taken = HashSet::new();

    for icon in icons {
        let name = unique_entry_name(&download_name(&icon.name), &mut taken);
        zip.start_file(name, options)?;
        zip.write_all(icon.svg.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}

fn unique_entry_name(name: &str, taken: &mut HashSet<String>) -> String {
    if taken.insert(name.to_string()) {
        return name.to_string();
    }
    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) => (stem, format!(".{ext}")),
        None => (name, String::new()),
    };
    let mut n = 2;
    loop {
        let candidate = format!("{stem}-{n}{ext}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn entries(bytes: Vec<u8>) -> Vec<(String, String)> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .map(|i| {
                let mut file = archive.by_index(i).unwrap();
                let mut content = String::new();
                file.read_to_string(&mut content).unwrap();
                (file.name().to_string(), content)
            })
            .collect()
    }

    #[test]
    fn test_bundle_icons() {
        let icons = vec![
            Icon::new("a.svg", "set", "<svg>A</svg>"),
            Icon::new("b", "set", "<svg>B</svg>"),
        ];

        let bytes = bundle_icons(&icons).unwrap();

        assert_eq!(
            entries(bytes),
            [
                ("a.svg".to_string(), "<svg>A</svg>".to_string()),
                ("b.svg".to_string(), "<svg>B</svg>".to_string()),
            ]
        );
    }

    #[test]
    fn test_bundle_icons_repeated_names() {
        let icons = vec![
            Icon::new("cap.svg", "set", "<svg>outline</svg>"),
            Icon::new("cap.svg", "set", "<svg>solid</svg>"),
            Icon::new("cap-2.svg", "set", "<svg>other</svg>"),
        ];

        let names: Vec<String> = entries(bundle_icons(&icons).unwrap())
            .into_iter()
            .map(|(name, _)| name)
            .collect();

        assert_eq!(names, ["cap.svg", "cap-2.svg", "cap-2-2.svg"]);
    }

    #[test]
    fn test_bundle_icons_empty() {
        assert!(entries(bundle_icons(&[]).unwrap()).is_empty());
    }

    #[test]
    fn test_bundle_href() {
        let set = IconSet::new("Feather", "feather", "", "", "4.29.0");
        assert_eq!(bundle_name(&set), "feather.zip");
        assert_eq!(bundle_href(&set), "/icon-sets/feather/feather.zip");
    }
}
