mod about;
mod friends;
mod health_check;
mod home;
mod newsletter;
mod not_found;
mod subscribe;

pub use about::*;
pub use friends::*;
pub use health_check::*;
pub use home::*;
pub use newsletter::*;
pub use not_found::*;
pub use subscribe::*;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
