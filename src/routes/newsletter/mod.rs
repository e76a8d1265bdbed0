mod get;
mod legacy;
mod post;

pub use get::signup_form;
pub use legacy::{legacy_signup, legacy_signup_form};
pub use post::{signup, SignupError};

use crate::utils::current_year;

pub(super) const WELCOME_MESSAGE: &str = "Thank you for subscribing in my newsletter.";

/// Subject lines address the subscriber by title-cased first name,
/// whatever casing they typed into the form.
pub(super) fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// The signup form page; `notice_html` lands above the form and holds
/// either a validation error or the post-submission thank-you note.
pub(super) fn signup_page(notice_html: &str) -> String {
    let year = current_year();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta http-equiv="content-type" content="text/html; charset=utf-8"/>
        <title>Newsletter signup</title>
    </head>
    <body>
        {notice_html}
        <form method="post" action="/form">
            <label>First Name
                <input type="text" placeholder="Enter your first name" name="first_name" />
            </label>
            <label>Last Name
                <input type="text" placeholder="Enter your last name" name="last_name" />
            </label>
            <label>Email Address
                <input type="email" placeholder="Enter your email" name="email" />
            </label>

            <button type="submit">Submit</button>
        </form>
        <footer>Copyright &copy; {year}</footer>
    </body>
</html>"#
    )
}
