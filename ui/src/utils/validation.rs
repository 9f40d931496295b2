use crate::features::auth::{FieldMarker, FormMode, OverlayPhase, ToastNotification};

/// Input class for a field carrying a validation marker
pub fn marker_class(marker: FieldMarker) -> &'static str {
    match marker {
        FieldMarker::Success => "input-field input-success",
        FieldMarker::Error => "input-field input-error",
        FieldMarker::None => "input-field",
    }
}

/// Container class for one of the two forms
pub fn form_container_class(form: FormMode, active: FormMode) -> &'static str {
    if form == active {
        "auth-form"
    } else {
        "auth-form hidden"
    }
}

/// `<form>` element class; forms are dimmed while a request is pending
pub fn form_element_class(loading: bool) -> &'static str {
    if loading {
        "space-y-5 loading"
    } else {
        "space-y-5"
    }
}

pub fn toast_class(toast: &ToastNotification) -> String {
    if toast.leaving {
        format!("toast {} removing", toast.severity.as_str())
    } else {
        format!("toast {}", toast.severity.as_str())
    }
}

pub fn overlay_class(phase: OverlayPhase) -> &'static str {
    match phase {
        OverlayPhase::Visible => "login-app",
        OverlayPhase::Closing => "login-app closing",
        OverlayPhase::Hidden => "login-app hidden",
    }
}

pub fn password_input_type(visible: bool) -> &'static str {
    if visible {
        "text"
    } else {
        "password"
    }
}

pub fn password_toggle_icon(visible: bool) -> &'static str {
    if visible {
        "visibility_off"
    } else {
        "visibility"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::ToastSeverity;

    #[test]
    fn test_marker_class() {
        assert_eq!(marker_class(FieldMarker::None), "input-field");
        assert!(marker_class(FieldMarker::Success).contains("input-success"));
        assert!(marker_class(FieldMarker::Error).contains("input-error"));
    }

    #[test]
    fn test_inactive_form_is_hidden() {
        assert_eq!(
            form_container_class(FormMode::Register, FormMode::Login),
            "auth-form hidden"
        );
        assert_eq!(form_container_class(FormMode::Login, FormMode::Login), "auth-form");
    }

    #[test]
    fn test_toast_class_tracks_severity_and_exit() {
        let mut toast = ToastNotification {
            id: 1,
            message: "Passwords do not match.".to_string(),
            severity: ToastSeverity::Warning,
            created_at_ms: 0.0,
            leaving: false,
        };
        assert_eq!(toast_class(&toast), "toast warning");
        toast.leaving = true;
        assert_eq!(toast_class(&toast), "toast warning removing");
    }

    #[test]
    fn test_password_toggle_presentation() {
        assert_eq!(password_input_type(false), "password");
        assert_eq!(password_input_type(true), "text");
        assert_eq!(password_toggle_icon(true), "visibility_off");
    }
}
