//! Press command - tap on-screen buttons

use anyhow::Result;
use clap::Args;

use gbweb_core::HostEvent;
use gbweb_shared::Button;

use crate::host::{self, HostOptions};

/// Arguments for the press command
#[derive(Args)]
pub struct PressArgs {
    /// Button ids (`a`, `b`, `start`, `select`, `up`, `down`, `left`, `right`;
    /// a `-btn` suffix is accepted)
    #[arg(required = true)]
    pub buttons: Vec<String>,
}

/// Parse button ids as the page's element ids name them.
pub fn parse_buttons(ids: &[String]) -> Result<Vec<Button>> {
    ids.iter()
        .map(|id| {
            Button::from_id(&id.to_ascii_lowercase())
                .ok_or_else(|| anyhow::anyhow!("Unknown button: {id}"))
        })
        .collect()
}

/// Execute the press command
///
/// Each button is entered then left, so one keydown and one keyup are
/// printed per tap.
pub async fn execute(options: &HostOptions, args: PressArgs) -> Result<()> {
    let buttons = parse_buttons(&args.buttons)?;
    let mut fe = host::open(options).await?;

    for button in buttons {
        host::send(&mut fe, HostEvent::ButtonEnter(button)).await?;
        host::send(&mut fe, HostEvent::ButtonLeave(button)).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_buttons_accepts_element_ids() {
        let ids = vec!["a-btn".to_string(), "Start".to_string(), "left".to_string()];
        assert_eq!(
            parse_buttons(&ids).unwrap(),
            vec![Button::A, Button::Start, Button::Left]
        );
    }

    #[test]
    fn test_parse_buttons_rejects_unknown() {
        let err = parse_buttons(&["turbo".to_string()]).unwrap_err();
        assert!(err.to_string().contains("turbo"));
    }
}
