//! Maps the refresh flag onto element visibility.

use crate::nodes::{ActivityIndicator, IndicatorStack, Label};

/// Recomputes spinner, label, and stack visibility from the refresh flag.
///
/// The mapping is a pure function of `(is_refreshing, label.text)`, so
/// re-applying the current state is a no-op. The label shows only while
/// refreshing with non-empty text; its text is left untouched here.
pub(crate) fn apply(
    is_refreshing: bool,
    spinner: &mut ActivityIndicator,
    label: &mut Label,
    stack: &mut IndicatorStack,
) {
    spinner.is_running = is_refreshing;
    spinner.is_visible = is_refreshing;
    label.is_visible = is_refreshing && label.has_text();
    stack.is_visible = is_refreshing;
}

#[cfg(test)]
mod tests {
    use super::*;
    use refreshkit_ui_graphics::{Color, EdgeInsets, Size};

    fn elements() -> (ActivityIndicator, Label, IndicatorStack) {
        (
            ActivityIndicator::new(Color::GRAY, EdgeInsets::uniform(10.0)),
            Label::new(Color::GRAY, EdgeInsets::uniform(10.0)),
            IndicatorStack::new(EdgeInsets::uniform(10.0), Size::new(200.0, 150.0)),
        )
    }

    #[test]
    fn refreshing_shows_spinner_and_stack() {
        let (mut spinner, mut label, mut stack) = elements();
        apply(true, &mut spinner, &mut label, &mut stack);

        assert!(spinner.is_visible && spinner.is_running);
        assert!(stack.is_visible);
        assert!(!label.is_visible, "empty text keeps the label hidden");
    }

    #[test]
    fn label_shows_only_with_text() {
        let (mut spinner, mut label, mut stack) = elements();
        label.text = "Loading...".into();
        apply(true, &mut spinner, &mut label, &mut stack);
        assert!(label.is_visible);
    }

    #[test]
    fn not_refreshing_hides_everything_but_keeps_text() {
        let (mut spinner, mut label, mut stack) = elements();
        label.text = "Loading...".into();
        apply(true, &mut spinner, &mut label, &mut stack);
        apply(false, &mut spinner, &mut label, &mut stack);

        assert!(!spinner.is_visible && !spinner.is_running);
        assert!(!stack.is_visible);
        assert!(!label.is_visible);
        assert_eq!(label.text, "Loading...");
    }

    #[test]
    fn reapplying_the_same_state_changes_nothing() {
        let (mut spinner, mut label, mut stack) = elements();
        label.text = "Syncing".into();
        apply(true, &mut spinner, &mut label, &mut stack);
        let snapshot = (spinner.clone(), label.clone(), stack.clone());

        apply(true, &mut spinner, &mut label, &mut stack);
        assert_eq!(snapshot, (spinner, label, stack));
    }
}
