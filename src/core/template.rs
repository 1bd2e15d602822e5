//! Template rendering
//!
//! Templates contain `{{KEY}}` placeholders that are replaced literally.
//! There is no escaping and no nesting: substituted values are never
//! scanned again.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::config::defaults;
use crate::core::manifest::WidgetConfig;
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Placeholder name to value
pub type Replacements = BTreeMap<String, String>;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("valid placeholder regex"))
}

/// Render `template`, replacing each `{{KEY}}` with its value in a single
/// left-to-right pass
pub fn render(template: &str, replacements: &Replacements) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in placeholder_regex().captures_iter(template) {
        let whole = caps.get(0).expect("capture group 0 always present");
        if let Some(value) = replacements.get(&caps[1]) {
            out.push_str(&template[last..whole.start()]);
            out.push_str(value);
            last = whole.end();
        }
    }
    out.push_str(&template[last..]);
    out
}

/// Placeholder names in `template` that have no replacement, in order of
/// first appearance
pub fn unresolved_placeholders(template: &str, replacements: &Replacements) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for caps in placeholder_regex().captures_iter(template) {
        let key = &caps[1];
        if !replacements.contains_key(key) && !missing.iter().any(|m| m == key) {
            missing.push(key.to_string());
        }
    }
    missing
}

/// Render and log any placeholder left unresolved
pub fn render_checked(template: &str, replacements: &Replacements, source: &str) -> String {
    for key in unresolved_placeholders(template, replacements) {
        tracing::warn!("Unresolved placeholder {{{{{key}}}}} in {source}");
    }
    render(template, replacements)
}

/// A manifest template and where its rendered output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTarget {
    /// Template file name inside the templates directory
    pub template: &'static str,
    /// Output path relative to the widget source directory
    pub output: PathBuf,
}

/// The manifest templates rendered for a widget
pub fn manifest_targets(widget: &WidgetConfig) -> Vec<TemplateTarget> {
    vec![
        TemplateTarget {
            template: "widget.xml",
            output: PathBuf::from(format!("{}.xml", widget.name)),
        },
        TemplateTarget {
            template: "package.xml",
            output: PathBuf::from("package.xml"),
        },
        TemplateTarget {
            template: "widget.css",
            output: Path::new(defaults::UI_DIR).join(format!("{}.css", widget.name)),
        },
    ]
}

/// Outcome of rendering one manifest template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TemplateOutcome {
    /// Rendered to `output`
    Rendered { template: String, output: PathBuf },
    /// Template file absent; artifact skipped
    Skipped { template: String },
}

/// Render every manifest template found in `templates_dir` into `src_dir`.
///
/// A missing template skips only its own artifact. Read/write failures
/// still abort.
pub fn render_manifests(
    templates_dir: &Path,
    src_dir: &Path,
    widget: &WidgetConfig,
) -> Result<Vec<TemplateOutcome>, FilesystemError> {
    let replacements = widget.replacements();
    let mut outcomes = Vec::new();

    for target in manifest_targets(widget) {
        let template_path = templates_dir.join(target.template);
        if !template_path.is_file() {
            tracing::warn!(
                "Template {} not found, skipping {}",
                template_path.display(),
                target.output.display()
            );
            outcomes.push(TemplateOutcome::Skipped {
                template: target.template.to_string(),
            });
            continue;
        }

        let content = filesystem::read_file(&template_path)?;
        let rendered = render_checked(&content, &replacements, target.template);
        let output = src_dir.join(&target.output);
        filesystem::write_file(&output, &rendered)?;
        tracing::info!("Generated: {}", output.display());

        outcomes.push(TemplateOutcome::Rendered {
            template: target.template.to_string(),
            output,
        });
    }

    Ok(outcomes)
}

/// Default `widget.xml` template written by `mxwidget init`
pub const DEFAULT_WIDGET_XML: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<widget id="{{PACKAGE_PATH}}.{{WIDGET_NAME_LOWER}}.{{WIDGET_NAME}}" pluginWidget="true" needsEntityContext="true" offlineCapable="true"
        supportedPlatform="Web"
        xmlns="http://www.mendix.com/widget/1.0/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
        xsi:schemaLocation="http://www.mendix.com/widget/1.0/ ../node_modules/mendix/custom_widget.xsd">
    <name>{{WIDGET_NAME}}</name>
    <description>{{WIDGET_NAME}} widget</description>
    <icon/>
    <properties>
        <propertyGroup caption="General">
            <propertyGroup caption="General">
                <property key="sampleText" type="string" required="false">
                    <caption>Default value</caption>
                    <description>Sample text input</description>
                </property>
            </propertyGroup>
        </propertyGroup>
    </properties>
</widget>
"#;

/// Default `package.xml` template written by `mxwidget init`
pub const DEFAULT_PACKAGE_XML: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<package xmlns="http://www.mendix.com/package/1.0/">
    <clientModule name="{{WIDGET_NAME}}" version="{{VERSION}}" xmlns="http://www.mendix.com/clientModule/1.0/">
        <widgetFiles>
            <widgetFile path="{{WIDGET_NAME}}.xml"/>
        </widgetFiles>
        <files>
            <file path="{{PACKAGE_PATH}}/{{WIDGET_NAME_LOWER}}"/>
        </files>
    </clientModule>
</package>
"#;

/// Default `widget.css` template written by `mxwidget init`
pub const DEFAULT_WIDGET_CSS: &str = r".widget-{{WIDGET_NAME_LOWER}} {
    display: block;
}
";

/// Default templates by file name
pub const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("widget.xml", DEFAULT_WIDGET_XML),
    ("package.xml", DEFAULT_PACKAGE_XML),
    ("widget.css", DEFAULT_WIDGET_CSS),
];
