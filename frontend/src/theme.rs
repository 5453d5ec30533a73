//! Colour tokens and the stylesheet built from them.

pub struct Palette;

impl Palette {
    pub const PRIMARY: &'static str = "#f65e4e";
    pub const PRIMARY_DARK: &'static str = "#ee5140";
    pub const PRIMARY_HOVER: &'static str = "#fc7365";

    pub const DISABLED_BG: &'static str = "#eeeeee";
    pub const DISABLED_BORDER: &'static str = "#e5e5e5";
    pub const DISABLED_TEXT: &'static str = "#d0d0d0";

    pub const LABEL: &'static str = "#585858";
    pub const INPUT_HOVER_BORDER: &'static str = "#c4c4c4";
    pub const INVALID_BG: &'static str = "rgba(255, 62, 62, 0.1)";
    pub const PAGE_BG: &'static str = "#f3f3f3";
    pub const BANNER_BG: &'static str = "#feeeed";
}

/// Stylesheet for the account page
pub fn stylesheet() -> String {
    format!(
        r#"
body {{ margin: 0; font-family: system-ui, sans-serif; }}
.account-page {{ background: {page_bg}; min-height: 100vh; display: flex; justify-content: center; }}
.account-column {{ width: 464px; margin: 64px 0; display: flex; flex-direction: column; align-items: center; }}
.account-column h1 {{ font-size: 24px; margin: 0 0 16px; }}
.account-section {{ width: 100%; box-sizing: border-box; padding: 32px; background: white; border-radius: 4px; display: flex; flex-direction: column; gap: 24px; }}
.account-section h2 {{ font-size: 16px; margin: 0; }}
.info-banner {{ display: flex; gap: 8px; padding: 12px 16px; background: {banner_bg}; color: {primary}; font-size: 12px; border-radius: 4px; }}
.form-group {{ display: flex; flex-direction: column; gap: 8px; }}
.form-group label {{ color: {label}; font-size: 12px; }}
.form-group input {{ height: 40px; padding: 0 16px; border: 1px solid {disabled_border}; border-radius: 4px; outline: none; box-shadow: none; }}
.form-group input:hover {{ border-color: {input_hover}; }}
.form-group input:active {{ border-color: {primary}; }}
.form-group input:focus {{ border-color: {disabled_border}; }}
.form-group input.invalid {{ border-color: {primary}; background: {invalid_bg}; }}
.form-group input:disabled {{ background: {disabled_bg}; border-color: {disabled_border}; color: {disabled_text}; cursor: not-allowed; opacity: 1; }}
.form-error-message {{ color: {primary}; font-size: 14px; }}
.form-actions {{ display: flex; justify-content: flex-end; }}
.btn-primary {{ height: 40px; padding: 0 16px; border: none; border-radius: 4px; background: {primary}; color: white; font-weight: 600; cursor: pointer; }}
.btn-primary:hover {{ background: {primary_hover}; }}
.btn-primary:active {{ background: {primary_dark}; }}
.btn-primary:focus {{ box-shadow: none; }}
.btn-primary:disabled {{ background: {disabled_bg}; color: {disabled_text}; cursor: not-allowed; }}
"#,
        page_bg = Palette::PAGE_BG,
        banner_bg = Palette::BANNER_BG,
        primary = Palette::PRIMARY,
        primary_dark = Palette::PRIMARY_DARK,
        primary_hover = Palette::PRIMARY_HOVER,
        label = Palette::LABEL,
        input_hover = Palette::INPUT_HOVER_BORDER,
        invalid_bg = Palette::INVALID_BG,
        disabled_bg = Palette::DISABLED_BG,
        disabled_border = Palette::DISABLED_BORDER,
        disabled_text = Palette::DISABLED_TEXT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_stylesheet_uses_palette() {
        let css = stylesheet();
        assert!(css.contains(".btn-primary { height: 40px"));
        assert!(css.contains(&format!("background: {}; color: white", Palette::PRIMARY)));
        assert!(css.contains(&format!(".btn-primary:hover {{ background: {}; }}", Palette::PRIMARY_HOVER)));
        assert!(css.contains(Palette::INVALID_BG));
    }

    #[wasm_bindgen_test]
    fn test_stylesheet_has_no_unfilled_placeholders() {
        let css = stylesheet();
        assert!(!css.contains("{primary"));
        assert!(!css.contains("{disabled"));
    }
}
