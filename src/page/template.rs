use super::config::PageConfig;
use crate::error::{Result, ShellError};
use crate::fs::FileSystem;
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use std::path::Path;

const TEMPLATE_NAME: &str = "index";

// {{{json value}}} で値をコンパクトな JSON として埋め込む
handlebars_helper!(json_helper: |value: Json| value.to_string());

/// テンプレートに渡すデータ
#[derive(Serialize)]
struct TemplateData<'a> {
    page_config: &'a PageConfig,
}

/// ブートストラップページのテンプレート
///
/// Handlebars 記法。変数は `page_config` のみ。
pub struct PageTemplate {
    registry: Handlebars<'static>,
}

impl std::fmt::Debug for PageTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageTemplate").finish_non_exhaustive()
    }
}

impl PageTemplate {
    /// テンプレート文字列をコンパイル
    pub fn compile(source: &str) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_helper("json", Box::new(json_helper));
        registry
            .register_template_string(TEMPLATE_NAME, source)
            .map_err(|e| ShellError::Template(e.to_string()))?;
        Ok(Self { registry })
    }

    /// ファイルから読み込んでコンパイル
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let source = fs.read_to_string(path)?;
        Self::compile(&source)
    }

    pub fn render(&self, config: &PageConfig) -> Result<String> {
        self.registry
            .render(
                TEMPLATE_NAME,
                &TemplateData {
                    page_config: config,
                },
            )
            .map_err(|e| ShellError::Template(e.to_string()))
    }
}
