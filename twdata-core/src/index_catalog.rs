//! Sector index names as printed by the portals, mapped to `IX` codes.

use std::collections::HashMap;
use std::sync::LazyLock;

/// TWSE electronics sector.
pub const TWSE_ELECTRONICS: &str = "IX0025";
/// TWSE finance and insurance sector.
pub const TWSE_FINANCE: &str = "IX0029";
/// TWSE chemical, biotechnology and medical care sector.
pub const TWSE_CHEMICAL_BIOTECH: &str = "IX0019";
/// TWSE market excluding finance and insurance.
pub const TWSE_NON_FINANCE: &str = "IX0007";
/// TWSE market excluding electronics.
pub const TWSE_NON_ELECTRONICS: &str = "IX0008";
/// TWSE market excluding finance, insurance and electronics.
pub const TWSE_NON_FINANCE_NON_ELECTRONICS: &str = "IX0009";

/// TPEx electronics sector.
pub const TPEX_ELECTRONICS: &str = "IX0047";
/// TPEx electronics sub-sectors whose sum is [`TPEX_ELECTRONICS`].
pub const TPEX_ELECTRONICS_MEMBERS: &[&str] = &[
    "IX0053", "IX0054", "IX0055", "IX0056", "IX0057", "IX0058", "IX0059", "IX0099",
];

static CATALOG: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // TWSE
        ("發行量加權股價指數", "IX0001"),
        ("未含金融保險股指數", TWSE_NON_FINANCE),
        ("未含電子股指數", TWSE_NON_ELECTRONICS),
        ("未含金融電子股指數", TWSE_NON_FINANCE_NON_ELECTRONICS),
        ("水泥類指數", "IX0010"),
        ("食品類指數", "IX0011"),
        ("塑膠類指數", "IX0012"),
        ("紡織纖維類指數", "IX0016"),
        ("電機機械類指數", "IX0017"),
        ("電器電纜類指數", "IX0018"),
        ("化學生技醫療類指數", TWSE_CHEMICAL_BIOTECH),
        ("玻璃陶瓷類指數", "IX0020"),
        ("造紙類指數", "IX0021"),
        ("鋼鐵類指數", "IX0022"),
        ("橡膠類指數", "IX0023"),
        ("汽車類指數", "IX0024"),
        ("電子類指數", TWSE_ELECTRONICS),
        ("電子工業類指數", TWSE_ELECTRONICS),
        ("建材營造類指數", "IX0026"),
        ("航運類指數", "IX0027"),
        ("觀光餐旅類指數", "IX0028"),
        ("觀光事業類指數", "IX0028"),
        ("金融保險類指數", TWSE_FINANCE),
        ("貿易百貨類指數", "IX0030"),
        ("其他類指數", "IX0031"),
        ("化學類指數", "IX0032"),
        ("生技醫療類指數", "IX0033"),
        ("油電燃氣類指數", "IX0034"),
        ("半導體類指數", "IX0035"),
        ("電腦及週邊設備類指數", "IX0036"),
        ("光電類指數", "IX0037"),
        ("通信網路類指數", "IX0038"),
        ("電子零組件類指數", "IX0039"),
        ("電子通路類指數", "IX0040"),
        ("資訊服務類指數", "IX0041"),
        ("其他電子類指數", "IX0042"),
        ("綠能環保類指數", "IX0185"),
        ("數位雲端類指數", "IX0186"),
        ("運動休閒類指數", "IX0187"),
        ("居家生活類指數", "IX0188"),
        // TPEx
        ("櫃買指數", "IX0043"),
        ("櫃買紡纖類指數", "IX0044"),
        ("櫃買紡織纖維類指數", "IX0044"),
        ("櫃買機電類指數", "IX0045"),
        ("櫃買電機機械類指數", "IX0045"),
        ("櫃買鋼鐵類指數", "IX0046"),
        ("櫃買電子類指數", TPEX_ELECTRONICS),
        ("櫃買營建類指數", "IX0048"),
        ("櫃買建材營造類指數", "IX0048"),
        ("櫃買航運類指數", "IX0049"),
        ("櫃買觀光類指數", "IX0050"),
        ("櫃買觀光餐旅類指數", "IX0050"),
        ("櫃買其他類指數", "IX0051"),
        ("櫃買化工類指數", "IX0052"),
        ("櫃買化學類指數", "IX0052"),
        ("櫃買生技醫療類指數", "IX0100"),
        ("櫃買半導體類指數", "IX0053"),
        ("櫃買電腦及週邊設備類指數", "IX0054"),
        ("櫃買光電類指數", "IX0055"),
        ("櫃買通信網路類指數", "IX0056"),
        ("櫃買電子零組件類指數", "IX0057"),
        ("櫃買電子通路類指數", "IX0058"),
        ("櫃買資訊服務類指數", "IX0059"),
        ("櫃買文化創意類指數", "IX0060"),
        ("櫃買其他電子類指數", "IX0099"),
        ("櫃買油電燃氣類指數", "IX0101"),
        ("櫃買綠能環保類指數", "IX0102"),
        ("櫃買數位雲端類指數", "IX0103"),
        ("櫃買居家生活類指數", "IX0104"),
    ])
});

/// `IX` code of a sector index name, ignoring surrounding whitespace.
#[must_use]
pub fn index_symbol(name: &str) -> Option<&'static str> {
    CATALOG.get(name.trim()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_share_a_code() {
        assert_eq!(index_symbol("電子類指數"), index_symbol("電子工業類指數"));
        assert_eq!(index_symbol(" 櫃買半導體類指數 "), Some("IX0053"));
        assert_eq!(index_symbol("不存在類指數"), None);
        assert_eq!(index_symbol("發行量加權股價指數"), Some("IX0001"));
    }

    #[test]
    fn tpex_electronics_members_are_catalogued() {
        for code in TPEX_ELECTRONICS_MEMBERS {
            assert!(CATALOG.values().any(|v| v == code), "{code}");
        }
    }
}
