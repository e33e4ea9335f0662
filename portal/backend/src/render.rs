//! Page rendering
//!
//! Every page is a body template wrapped in `layout`. Callers pass the
//! toasts that belong to the response being rendered.

use handlebars::Handlebars;
use medicare_forms::pages::home::{FEATURES, SUPPORT};
use medicare_forms::{
    FieldKind, FieldSpec, FormWorkflow, NavShell, Notification, RatingControl, Route, SubmitIntent,
    BRAND,
};
use serde_json::{json, Value};

use crate::error::PortalError;

/// Hidden form field carrying what the browser asked for
pub const INTENT_FIELD: &str = "_intent";
pub const INTENT_SUBMIT: &str = "submit";
pub const INTENT_REFRESH: &str = "refresh";

const LAYOUT_TEMPLATE: &str = include_str!("../templates/layout.hbs");
const HOME_TEMPLATE: &str = include_str!("../templates/home.hbs");
const FORM_TEMPLATE: &str = include_str!("../templates/form.hbs");
const NOT_FOUND_TEMPLATE: &str = include_str!("../templates/not_found.hbs");

pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, PortalError> {
        let mut hb = Handlebars::new();

        hb.register_template_string("layout", LAYOUT_TEMPLATE)?;
        hb.register_template_string("home", HOME_TEMPLATE)?;
        hb.register_template_string("form", FORM_TEMPLATE)?;
        hb.register_template_string("not_found", NOT_FOUND_TEMPLATE)?;

        Ok(Self { handlebars: hb })
    }

    pub fn home(&self, toasts: &[Notification]) -> Result<String, PortalError> {
        let body = self.handlebars.render(
            "home",
            &json!({
                "brand": BRAND,
                "features": FEATURES,
                "support": SUPPORT,
            }),
        )?;
        self.layout(&Route::Home, body, toasts)
    }

    pub fn form(&self, workflow: &FormWorkflow, toasts: &[Notification]) -> Result<String, PortalError> {
        let route = Route::Form(workflow.kind());
        let body = self.handlebars.render("form", &form_view(workflow, route.path()))?;
        self.layout(&route, body, toasts)
    }

    pub fn not_found(&self, path: &str, toasts: &[Notification]) -> Result<String, PortalError> {
        let route = Route::NotFound(path.to_string());
        let body = self.handlebars.render("not_found", &json!({ "path": path }))?;
        self.layout(&route, body, toasts)
    }

    fn layout(&self, route: &Route, body: String, toasts: &[Notification]) -> Result<String, PortalError> {
        let data = json!({
            "title": route.title(),
            "nav": NavShell::new().view(route),
            "toasts": toasts,
            "body": body,
        });
        Ok(self.handlebars.render("layout", &data)?)
    }
}

fn form_view(workflow: &FormWorkflow, action: &str) -> Value {
    let affordance = workflow.submit_affordance();
    let has_gates = workflow.page().schema().fields().iter().any(|f| f.visible_when.is_some());

    json!({
        "title": workflow.page().title(),
        "description": workflow.page().description(),
        "action": action,
        "fields": workflow.visible_fields().map(|f| field_view(workflow, f)).collect::<Vec<_>>(),
        "has_gates": has_gates,
        "intent_field": INTENT_FIELD,
        "intent_submit": INTENT_SUBMIT,
        "intent_refresh": INTENT_REFRESH,
        "submit": {
            "label": affordance.current_label(),
            "destructive": affordance.intent == SubmitIntent::Destructive,
            "disabled": affordance.disabled,
        },
    })
}

fn field_view(workflow: &FormWorkflow, spec: &FieldSpec) -> Value {
    let value = workflow.value(&spec.name);
    let input_type = match spec.kind {
        FieldKind::Email => "email",
        FieldKind::Number => "number",
        FieldKind::Date => "date",
        _ => "text",
    };

    let options: Vec<Value> = spec
        .options
        .iter()
        .map(|o| json!({ "value": o.value, "label": o.label, "selected": o.value == value }))
        .collect();

    let mut view = json!({
        "name": spec.name,
        "label": workflow.label(spec),
        "value": value,
        "placeholder": workflow.placeholder(spec),
        "error": workflow.error(&spec.name),
        "required": spec.is_required(workflow.record().values()),
        "input_type": input_type,
        "is_input": matches!(spec.kind, FieldKind::Text | FieldKind::Email | FieldKind::Number | FieldKind::Date),
        "is_textarea": spec.kind == FieldKind::TextArea,
        "is_select": spec.kind == FieldKind::Select,
        "is_choice": spec.kind == FieldKind::ChoiceGroup,
        "is_rating": spec.kind == FieldKind::Rating,
        "options": options,
    });

    if spec.kind == FieldKind::Rating {
        let control = RatingControl::from_value(value);
        // highest first; the stylesheet reverses them and fills by sibling order
        let stars: Vec<Value> = control
            .indicators()
            .into_iter()
            .rev()
            .map(|star| {
                json!({
                    "level": star.level,
                    "checked": control.committed() == Some(star.level),
                })
            })
            .collect();
        view["stars"] = json!(stars);
        view["caption"] = json!(control.caption());
    }

    view
}
