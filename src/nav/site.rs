//! Built-in site tree
//!
//! The page tree shipped with the site. Configuration may replace it with
//! `[[navigation.pages]]` entries.

use super::model::RawNavNode;

fn page(name: &str, label: Label<'_>, file: &str, icon: &str) -> RawNavNode {
    let (text_key, text) = label.split();
    RawNavNode {
        name: name.to_string(),
        text_key,
        text,
        icon: Some(icon.to_string()),
        file: Some(file.to_string()),
        children: None,
    }
}

fn folder(name: &str, label: Label<'_>, icon: &str, children: Vec<RawNavNode>) -> RawNavNode {
    let (text_key, text) = label.split();
    RawNavNode {
        name: name.to_string(),
        text_key,
        text,
        icon: Some(icon.to_string()),
        file: None,
        children: Some(children),
    }
}

enum Label<'a> {
    Key(&'a str),
    Text(&'a str),
}

impl Label<'_> {
    fn split(&self) -> (Option<String>, Option<String>) {
        match self {
            Label::Key(key) => (Some(key.to_string()), None),
            Label::Text(text) => (None, Some(text.to_string())),
        }
    }
}

/// Default navigation pages, in display order
pub fn default_pages() -> Vec<RawNavNode> {
    use Label::{Key, Text};

    vec![
        page("anasayfa", Key("nav_anasayfa"), "html/anasayfa.html", "images/tk_16x16.png"),
        folder(
            "matematik-ve-kod",
            Key("Matematik_ve_Kodlama"),
            "images/matevekod_16x16.png",
            vec![
                page("RMBiVD", Key("nav_RMBiVD"), "html/RMBiVD.html", "images/mavitop_16x16.png"),
                page("Agac", Text("Ağaç"), "html/Agac.html", "images/agacimsi_16x16.png"),
                page("USD", Text("USKD"), "html/UcgenSayDong.html", "images/cizgiler_16x16.png"),
                page("SSMT", Text("WIP SSMT"), "html/SSMT.html", "images/tank_16x16.png"),
                page("MH", Text("WIP MontyHall"), "html/MontyHall.html", "images/kapı_16x16.png"),
                page("FT", Text("WIP FormulTahmin"), "html/FormTahm.html", "images/253_16x16.png"),
                folder(
                    "algoritmalar",
                    Key("nav_algoritmalar"),
                    "images/algoritmalar_16x16.png",
                    vec![page(
                        "PSPp",
                        Text("WIP PSP+"),
                        "html/Pspp.html",
                        "images/pulumsu_16x16.png",
                    )],
                ),
            ],
        ),
        folder(
            "gundelik-hayat",
            Key("nav_gundelik_hayat"),
            "images/gundelik_16x16.png",
            vec![page(
                "meyve_suyu",
                Key("nav_meyve_suyu"),
                "html/Gündelik Hayat/meyve_suyu.html",
                "images/meyvesuyu_16x16.png",
            )],
        ),
        page("iletisim", Key("nav_iletisim"), "html/iletisim.html", "images/hi_16x16.png"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::model::NavTree;

    #[test]
    fn test_default_pages_are_valid() {
        let tree = NavTree::from_raw(default_pages()).unwrap();
        assert_eq!(tree.roots().len(), 4);
        assert_eq!(tree.leaf_count(), 10);
        assert_eq!(tree.node_count(), 13);
    }

    #[test]
    fn test_nested_page_lookup() {
        let tree = NavTree::from_raw(default_pages()).unwrap();
        let page = tree.page_info("PSPp").unwrap();
        assert_eq!(page.file(), Some("html/Pspp.html"));
    }
}
