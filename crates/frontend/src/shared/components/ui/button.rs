use leptos::prelude::*;

/// Button component with variants (primary, outline, ghost, danger) and sizes (sm, md, lg)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "outline", "ghost" or "danger"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default), "sm" or "lg"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Stretch to the container width
    #[prop(optional)]
    full_width: bool,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "outline" => "button--outline",
        "ghost" => "button--ghost",
        "danger" => "button--danger",
        _ => "button--primary",
    };

    let size_class = move || match size.get().as_deref() {
        Some("sm") => "button--sm",
        Some("lg") => "button--lg",
        _ => "",
    };

    let width_class = if full_width { "button--block" } else { "" };
    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!(
                "button {} {} {} {}",
                variant_class(),
                size_class(),
                width_class,
                additional_class()
            )
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
