use alfamind_core::{Screen, StoreProfile};

use crate::component::Component;

pub mod home;
pub mod login;
pub mod signup;
pub mod splash;

/// Build one component per navigable screen, keyed by its router state.
pub fn create_screens(profile: &StoreProfile) -> Vec<(Screen, Box<dyn Component>)> {
    vec![
        (
            Screen::Splash,
            Box::new(splash::SplashScreen::new()) as Box<dyn Component>,
        ),
        (Screen::Login, Box::new(login::LoginScreen::new())),
        (Screen::Signup, Box::new(signup::SignupScreen::new())),
        (Screen::Home, Box::new(home::HomeScreen::new(profile.clone()))),
    ]
}

#[cfg(test)]
pub(crate) mod test_util {
    use ratatui::buffer::Buffer;

    /// Flatten a render buffer into a newline-separated string for
    /// substring assertions.
    pub(crate) fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in buf.area.top()..buf.area.bottom() {
            for x in buf.area.left()..buf.area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}
