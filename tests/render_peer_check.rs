//! Every render runs the peer check exactly once
//!
//! Kept alone in its own test binary: it counts warnings on the process-wide guard.

use widget_kit::markup::p;
use widget_kit::peer::{self, PeerGuard, PeerRequirement};
use widget_kit::{ButtonProps, CardProps, render_button, render_card};

#[test]
fn each_render_checks_peers_once() {
    peer::reset_for_testing();
    peer::install_guard(PeerGuard::new(vec![
        PeerRequirement::parse("render-check-host", ">=1.0.0").expect("valid requirement"),
    ]));
    assert_eq!(peer::warnings_emitted(), 0);

    render_button(ButtonProps::new("Click me"));
    assert_eq!(peer::warnings_emitted(), 1);

    render_card(CardProps::new(p().child("Card content")).title("Test Card"));
    assert_eq!(peer::warnings_emitted(), 2);

    // A button nested in a card is its own render
    render_card(CardProps::new(ButtonProps::new("Nested")));
    assert_eq!(peer::warnings_emitted(), 4);

    // Declared and compatible: renders stay silent
    peer::declare_host_peer("render-check-host", "1.2.0");
    render_button(ButtonProps::new("Quiet"));
    render_card(CardProps::new("Quiet"));
    assert_eq!(peer::warnings_emitted(), 4);

    peer::reset_for_testing();
}
