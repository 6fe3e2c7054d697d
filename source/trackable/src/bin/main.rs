use {
    rooting::{
        el,
        set_root,
    },
    trackable::{
        dom::{
            init_console_logging,
            DomCheckbox,
            DomVisibility,
        },
        BooleanConfig,
        CheckboxBinding,
        Trackable,
        TrackableBoolean,
        VisibilityBinding,
    },
};

static CONFIG: &str = r#"{"value": true, "default": true}"#;

fn main() {
    console_error_panic_hook::set_once();
    init_console_logging();
    let config = match serde_json::from_str::<BooleanConfig>(CONFIG) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = %e, "Bad demo config, using defaults");
            BooleanConfig::default()
        },
    };
    let model = TrackableBoolean::from_config(&config);
    let details = el("div");
    details.ref_text("Details");
    let checkbox = CheckboxBinding::<DomCheckbox>::new(&model);
    let label_text = el("span");
    label_text.ref_text("Show details");
    let label = el("label").push(checkbox.control().el().clone()).push(label_text);
    let toggle = el("button");
    toggle.ref_text("Toggle");
    toggle.ref_on("click", {
        let model = model.clone();
        move |_| {
            model.toggle();
            tracing::debug!(state = ?model.to_json(), "Toggled");
        }
    });
    let root = el("div").push(label).push(toggle).push(details.clone());
    let Some(details_visibility) = DomVisibility::from_el(&details) else {
        tracing::warn!("Details element isn't an html element");
        return;
    };
    let visibility = VisibilityBinding::new(&model, details_visibility);
    root.ref_own(|_| (checkbox, visibility));
    set_root(vec![root]);
}
