//! Shared presentational primitives: card, badge, button styles, alert.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::chains::NetworkLabel;

stylance::import_crate_style!(css, "src/components/ui/ui.module.css");

/// Class applied to spinning icons.
pub const SPIN_CLASS: &str = css::spin;

/// Card with a title, optional description and body.
#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(into, optional)] description: Option<String>,
    /// Icon shown before the title.
    #[prop(optional)]
    icon: Option<icondata::Icon>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=css::card>
            <header class=css::cardHeader>
                <h3 class=css::cardTitle>
                    {icon.map(|icon| view! { <Icon icon=icon /> })}
                    {title}
                </h3>
                {description.map(|d| view! { <p class=css::cardDescription>{d}</p> })}
            </header>
            <div class=css::cardContent>{children()}</div>
        </section>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
}

impl BadgeVariant {
    /// Registry networks get the default badge, anything else is flagged.
    pub fn for_network(label: &NetworkLabel) -> Self {
        if label.known {
            BadgeVariant::Default
        } else {
            BadgeVariant::Destructive
        }
    }

    pub fn class(self) -> String {
        let variant = match self {
            BadgeVariant::Default => css::badgeDefault,
            BadgeVariant::Secondary => css::badgeSecondary,
            BadgeVariant::Destructive => css::badgeDestructive,
        };
        format!("{} {}", css::badge, variant)
    }
}

#[component]
pub fn Badge(#[prop(into)] variant: Signal<BadgeVariant>, children: Children) -> impl IntoView {
    view! { <span class=move || variant.get().class()>{children()}</span> }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

/// Button sizing and layout modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub small: bool,
    /// Full width, content aligned left.
    pub block: bool,
}

impl ButtonStyle {
    pub fn class(self) -> String {
        let mut class = String::from(css::button);
        for extra in [
            Some(match self.variant {
                ButtonVariant::Primary => css::buttonPrimary,
                ButtonVariant::Outline => css::buttonOutline,
                ButtonVariant::Ghost => css::buttonGhost,
            }),
            self.small.then_some(css::buttonSmall),
            self.block.then_some(css::buttonBlock),
        ]
        .into_iter()
        .flatten()
        {
            class.push(' ');
            class.push_str(extra);
        }
        class
    }
}

/// Informational notice with a leading alert icon.
#[component]
pub fn Alert(children: Children) -> impl IntoView {
    view! {
        <div class=css::alert role="alert">
            <Icon icon=ic::ALERT />
            <div>{children()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chains::network_label;

    #[test]
    fn test_network_badge() {
        assert_eq!(
            BadgeVariant::for_network(&network_label(1)),
            BadgeVariant::Default
        );
        assert_eq!(
            BadgeVariant::for_network(&network_label(11155111)),
            BadgeVariant::Default
        );
        assert_eq!(
            BadgeVariant::for_network(&network_label(137)),
            BadgeVariant::Destructive
        );
    }
}
