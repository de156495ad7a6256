//! 舊版求解器變數名稱解析
//!
//! 格式為 `"<前綴>_<產品名稱>_<模式名稱>"`，以底線分隔。
//! 名稱本身含有底線時會被錯誤切分，因此新後端應改用結構化鍵。

/// 變數名稱分隔符
pub const KEY_SEPARATOR: char = '_';

/// 解析後的名稱片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTokens<'a> {
    pub product: &'a str,
    pub mode: &'a str,
}

/// 取第二段為產品名稱、第三段為模式名稱；段數不足時回傳 None
///
/// 第三段之後的內容會被忽略。
pub fn parse(key: &str) -> Option<KeyTokens<'_>> {
    let mut parts = key.split(KEY_SEPARATOR);
    let _prefix = parts.next()?;
    let product = parts.next()?;
    let mode = parts.next()?;

    Some(KeyTokens { product, mode })
}

/// 依產品與模式名稱組合變數名稱
pub fn compose(prefix: &str, product: &str, mode: &str) -> String {
    format!("{prefix}{KEY_SEPARATOR}{product}{KEY_SEPARATOR}{mode}")
}
