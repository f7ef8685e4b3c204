//! マークアップ埋め込み用のエスケープ処理
//!
//! カタログ由来の文字列（タイトル・説明）は信頼できない入力として扱い、
//! マークアップに埋め込む前に必ず `escape` を通す。

use crate::error::{NotecatError, Result};

/// `& < > " '` を実体参照に置換する
///
/// - 空文字列は空文字列を返す
/// - それ以外の文字は変更しない
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// ファイル参照を `data-file` 属性用にエンコード
pub fn encode_file_ref(file: &str) -> String {
    urlencoding::encode(file).into_owned()
}

/// `data-file` 属性値を元のファイル参照にデコード
pub fn decode_file_ref(attr: &str) -> Result<String> {
    urlencoding::decode(attr)
        .map(|s| s.into_owned())
        .map_err(|_| NotecatError::InvalidFileRef(attr.to_string()))
}

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod tests;
