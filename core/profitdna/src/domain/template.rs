//! プロンプトテンプレート
//!
//! リテラル文字列と、宣言済みの名前付きプレースホルダ（`{{name}}`）の組。
//! 置換は純粋関数で、束縛の不足・未宣言の名前はテンプレート定義ミスとしてエラーにする。

use common::error::Error;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{([a-z_]+)\}\}").expect("placeholder regex"))
}

/// プレースホルダ名 -> 値
#[derive(Debug, Clone, Default)]
pub struct Bindings<'a>(BTreeMap<&'static str, &'a str>);

impl<'a> Bindings<'a> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, name: &'static str, value: &'a str) -> Self {
        self.0.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.0.get(name).copied()
    }

    fn names(&self) -> impl Iterator<Item = &&'static str> {
        self.0.keys()
    }
}

/// 静的なプロンプトテンプレート（実行時に書き換えない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    name: &'static str,
    literal: &'static str,
    placeholders: &'static [&'static str],
}

impl PromptTemplate {
    pub const fn new(
        name: &'static str,
        literal: &'static str,
        placeholders: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            literal,
            placeholders,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn placeholders(&self) -> &'static [&'static str] {
        self.placeholders
    }

    /// リテラル中のプレースホルダと宣言が一致しているか
    pub fn validate(&self) -> Result<(), Error> {
        let mut used: Vec<&str> = placeholder_re()
            .captures_iter(self.literal)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();
        used.sort_unstable();
        used.dedup();

        let mut declared: Vec<&str> = self.placeholders.to_vec();
        declared.sort_unstable();
        declared.dedup();

        if used != declared {
            return Err(Error::template(format!(
                "template '{}' declares {:?} but its text uses {:?}",
                self.name, declared, used
            )));
        }
        Ok(())
    }

    /// すべてのプレースホルダを束縛の値で置換する
    ///
    /// 1 パスで置換するため、値の中に `{{...}}` が含まれていても再置換されない（置換順に依存しない）。
    pub fn render(&self, bindings: &Bindings<'_>) -> Result<String, Error> {
        if let Some(missing) = self
            .placeholders
            .iter()
            .find(|name| bindings.get(name).is_none())
        {
            return Err(Error::template(format!(
                "template '{}' has no binding for '{}'",
                self.name, missing
            )));
        }
        if let Some(extra) = bindings.names().find(|n| !self.placeholders.contains(*n)) {
            return Err(Error::template(format!(
                "template '{}' does not declare '{}'",
                self.name, extra
            )));
        }

        let mut undeclared: Option<String> = None;
        let rendered = placeholder_re().replace_all(self.literal, |caps: &Captures<'_>| {
            match bindings.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => {
                    undeclared.get_or_insert_with(|| caps[1].to_string());
                    caps[0].to_string()
                }
            }
        });
        if let Some(name) = undeclared {
            return Err(Error::template(format!(
                "template '{}' uses undeclared placeholder '{}'",
                self.name, name
            )));
        }
        Ok(rendered.into_owned())
    }
}
