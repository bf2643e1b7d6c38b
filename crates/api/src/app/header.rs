//! Auth-state header rendering.
//!
//! The storefront header carries a user menu whose content depends only on
//! the identity provider's sign-in state, so rendering is a pure function
//! of that state. Identity internals stay out of scope: all we consume is
//! the signed-in email claim.

/// Marker comment in the header template where the user menu is spliced in.
pub const USER_MENU_MARKER: &str = "<!-- User menu will be inserted here -->";

/// Sign-in state as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    SignedOut,
    SignedIn { email: String },
}

/// Replace the user-menu marker in `template` with the menu for `state`.
/// Templates without the marker pass through unchanged.
pub fn render_header(template: &str, state: &AuthState) -> String {
    template.replacen(USER_MENU_MARKER, &render_user_menu(state), 1)
}

pub fn render_user_menu(state: &AuthState) -> String {
    match state {
        AuthState::SignedOut => concat!(
            r#"<a href="login.html" class="border px-3 py-1 rounded-full text-sm hover:bg-gray-100">로그인</a>"#,
            "\n",
            r#"<a href="signup.html" class="border px-3 py-1 rounded-full text-sm hover:bg-blue-100 text-blue-600">회원가입</a>"#,
        )
        .to_string(),
        AuthState::SignedIn { email } => format!(
            concat!(
                r#"<a href="cart.html" class="relative p-2 hover:bg-gray-100 rounded-lg transition">장바구니</a>"#,
                "\n",
                r#"<span class="text-sm font-semibold text-gray-700">👤 {email} 님</span>"#,
                "\n",
                r#"<a href="mypage.html" class="border px-3 py-1 rounded-full text-sm hover:bg-gray-100">마이페이지</a>"#,
                "\n",
                r#"<button onclick="logout()" class="border px-3 py-1 rounded-full text-sm hover:bg-red-100 text-red-600">로그아웃</button>"#,
            ),
            email = email
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str =
        "<header><nav><!-- User menu will be inserted here --></nav></header>";

    #[test]
    fn signed_out_renders_login_and_signup() {
        let html = render_header(TEMPLATE, &AuthState::SignedOut);
        assert!(html.contains("로그인"));
        assert!(html.contains("회원가입"));
        assert!(!html.contains("로그아웃"));
        assert!(!html.contains(USER_MENU_MARKER));
    }

    #[test]
    fn signed_in_renders_email_and_logout() {
        let state = AuthState::SignedIn {
            email: "user@example.com".to_string(),
        };
        let html = render_header(TEMPLATE, &state);
        assert!(html.contains("user@example.com"));
        assert!(html.contains("마이페이지"));
        assert!(html.contains("로그아웃"));
        assert!(!html.contains("로그인</a>"));
    }

    #[test]
    fn template_without_marker_is_untouched() {
        let html = render_header("<header></header>", &AuthState::SignedOut);
        assert_eq!(html, "<header></header>");
    }
}
