//! Styled button primitive.
//!
//! DESIGN
//! ======
//! Styling is a pure lookup from `(variant, size)` into a [`ButtonTheme`]
//! table. The table is read-only; apps may provide their own through Leptos
//! context, otherwise [`ButtonTheme::DEFAULT`] applies.
//!
//! With `as_child`, the button renders its single child (usually a router
//! `<A>`) and merges the computed classes onto it, so links look like buttons
//! but keep client-side navigation.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;
use leptos::tachys::html::class::class as class_attr;
use leptos::tachys::view::add_attr::AddAnyAttr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    const ALL: [Self; 6] = [
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    /// Parse a variant name, falling back to [`ButtonVariant::Default`].
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|v| v.as_str() == raw).unwrap_or_default()
    }
}

impl From<&str> for ButtonVariant {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Full,
    Icon,
}

impl ButtonSize {
    const ALL: [Self; 5] = [Self::Default, Self::Sm, Self::Lg, Self::Full, Self::Icon];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Full => "full",
            Self::Icon => "icon",
        }
    }

    /// Parse a size name, falling back to [`ButtonSize::Default`].
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.as_str() == raw).unwrap_or_default()
    }
}

impl From<&str> for ButtonSize {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Class table for every variant and size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonTheme {
    pub base: &'static str,
    pub variants: [&'static str; 6],
    pub sizes: [&'static str; 5],
}

impl ButtonTheme {
    pub const DEFAULT: Self = Self {
        base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium \
               transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring \
               disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg]:size-4 \
               [&_svg]:shrink-0",
        variants: [
            "bg-primary text-primary-foreground shadow hover:bg-primary/90",
            "bg-destructive text-destructive-foreground shadow-sm hover:bg-destructive/90",
            "border border-input bg-background shadow-sm hover:bg-accent hover:text-accent-foreground",
            "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80",
            "hover:bg-accent hover:text-accent-foreground",
            "text-primary underline-offset-4 hover:underline",
        ],
        sizes: [
            "h-9 px-4 py-2",
            "h-8 rounded-md px-3 text-xs",
            "h-10 rounded-md px-8",
            "h-10 w-full rounded-md px-8",
            "h-9 w-9",
        ],
    };

    pub fn variant_class(&self, variant: ButtonVariant) -> &'static str {
        self.variants[variant as usize]
    }

    pub fn size_class(&self, size: ButtonSize) -> &'static str {
        self.sizes[size as usize]
    }
}

impl Default for ButtonTheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What the button renders as its root element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonElement {
    /// A new `<button>` wrapping the children.
    Button,
    /// The single child itself, with classes merged onto it.
    Child,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonConfig {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub as_child: bool,
}

impl ButtonConfig {
    pub fn element(self) -> ButtonElement {
        if self.as_child { ButtonElement::Child } else { ButtonElement::Button }
    }

    /// Full class string for this config, with `extra` appended.
    pub fn class_name(self, theme: &ButtonTheme, extra: &str) -> String {
        merge_classes(&[theme.base, theme.variant_class(self.variant), theme.size_class(self.size), extra])
    }
}

/// Join class lists, dropping empty parts and repeated tokens.
pub fn merge_classes(parts: &[&str]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for token in parts.iter().flat_map(|p| p.split_whitespace()) {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen.join(" ")
}

/// Styled button; see the module docs for `as_child`.
#[component]
pub fn Button(
    #[prop(optional, into)] variant: ButtonVariant,
    #[prop(optional, into)] size: ButtonSize,
    #[prop(optional)] as_child: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional)] disabled: bool,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let theme = use_context::<ButtonTheme>().unwrap_or_default();
    let config = ButtonConfig { variant, size, as_child };
    let classes = config.class_name(&theme, &class);

    match config.element() {
        ButtonElement::Child => children().add_any_attr(class_attr(classes)).into_any(),
        ButtonElement::Button => view! {
            <button
                type=button_type
                class=classes
                disabled=disabled
                on:click=move |_| {
                    if let Some(cb) = on_click {
                        cb.run(());
                    }
                }
            >
                {children()}
            </button>
        }
        .into_any(),
    }
}
