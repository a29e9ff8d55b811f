//! 域名名称处理
//!
//! Provider APIs disagree on whether zone and record names carry the root
//! label's trailing dot. Everything crossing the [`ZoneProvider`](crate::ZoneProvider)
//! boundary is absolute; [`to_absolute`] brings names into that form.

/// 补全末尾的点
/// 如: "example.com" -> "example.com."
/// 如: "example.com." -> "example.com."
pub fn to_absolute(name: &str) -> String {
    if is_absolute(name) {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// 是否为绝对名称（以点结尾）
pub fn is_absolute(name: &str) -> bool {
    name.ends_with('.')
}
