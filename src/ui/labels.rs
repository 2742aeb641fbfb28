use crate::config::Locale;
use crate::controller::Screen;

/// Static UI text for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub login_title: &'static str,
    pub home_title: &'static str,
    pub username_hint: &'static str,
    pub password_hint: &'static str,
    pub login_button: &'static str,
    pub click_button: &'static str,
    pub reset_button: &'static str,
    pub logout_button: &'static str,
    pub click_count: &'static str,
    pub signed_in_as: &'static str,
    pub login_hints: &'static str,
    pub home_hints: &'static str,
}

const ZH: Labels = Labels {
    login_title: "用户登录",
    home_title: "主页",
    username_hint: "用户名",
    password_hint: "密码",
    login_button: "登录",
    click_button: "点击",
    reset_button: "重置",
    logout_button: "退出登录",
    click_count: "点击次数",
    signed_in_as: "当前用户",
    login_hints: " Tab: 下一项 │ Enter: 登录 │ Esc/Ctrl+Q: 退出",
    home_hints: " Tab: 下一项 │ Enter: 确认 │ Esc/Ctrl+Q: 退出",
};

const EN: Labels = Labels {
    login_title: "Sign in",
    home_title: "Home",
    username_hint: "Username",
    password_hint: "Password",
    login_button: "Log in",
    click_button: "Click",
    reset_button: "Reset",
    logout_button: "Log out",
    click_count: "Clicks",
    signed_in_as: "Signed in as",
    login_hints: " Tab: Next │ Enter: Log in │ Esc/Ctrl+Q: Quit",
    home_hints: " Tab: Next │ Enter: Press │ Esc/Ctrl+Q: Quit",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::Zh => &ZH,
            Locale::En => &EN,
        }
    }

    /// Footer key hints for `screen`.
    pub fn hints(&self, screen: Screen) -> &'static str {
        match screen {
            Screen::Login => self.login_hints,
            Screen::Home => self.home_hints,
        }
    }

    /// "点击次数: 3" / "Clicks: 3"
    pub fn click_count_line(&self, count: u64) -> String {
        format!("{}: {}", self.click_count, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_locale() {
        let zh = Labels::for_locale(Locale::Zh);
        let en = Labels::for_locale(Locale::En);
        assert!(zh.hints(Screen::Login).contains("登录"));
        assert!(en.hints(Screen::Login).contains("Log in"));
        assert_ne!(zh.hints(Screen::Home), en.hints(Screen::Home));
    }

    #[test]
    fn click_count_line_uses_locale_label() {
        assert_eq!(Labels::for_locale(Locale::Zh).click_count_line(3), "点击次数: 3");
        assert_eq!(Labels::for_locale(Locale::En).click_count_line(3), "Clicks: 3");
    }
}
