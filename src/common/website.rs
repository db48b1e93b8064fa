pub const MESSAGES_URL: &str = "/messages";

pub fn get_message_url(name: &str) -> String {
    format!("/messages/{}", urlencoding::encode(name))
}

pub fn get_login_url(next: &str) -> String {
    format!("/login?next={}", urlencoding::encode(next))
}

pub fn get_logout_url(next: &str) -> String {
    format!("/logout?next={}", urlencoding::encode(next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_urls_escape_reserved_characters() {
        assert_eq!(get_message_url("hello world"), "/messages/hello%20world");
        assert_eq!(get_message_url("a/b"), "/messages/a%2Fb");
    }

    #[test]
    fn auth_urls_carry_the_next_destination() {
        assert_eq!(
            get_login_url("/messages/hello world"),
            "/login?next=%2Fmessages%2Fhello%20world"
        );
        assert_eq!(get_logout_url("/messages"), "/logout?next=%2Fmessages");
    }
}
