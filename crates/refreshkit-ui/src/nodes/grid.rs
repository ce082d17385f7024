use smallvec::SmallVec;

use super::hosted::HostedView;
use refreshkit_ui_graphics::Color;

/// A child slot of the single-cell grid.
#[derive(Clone, Debug)]
pub enum GridSlot {
    /// The host application's content view.
    Content(HostedView),
    /// The widget's own indicator stack overlay.
    Indicator,
}

/// Single-cell container layering hosted content behind the indicator stack.
///
/// The indicator slot is present from construction and always ordered after
/// the content slot, so the overlay draws on top.
#[derive(Clone, Debug)]
pub struct Grid {
    pub background: Color,
    children: SmallVec<[GridSlot; 2]>,
}

impl Grid {
    pub fn new(background: Color) -> Self {
        let mut children = SmallVec::new();
        children.push(GridSlot::Indicator);
        Self {
            background,
            children,
        }
    }

    pub fn children(&self) -> &[GridSlot] {
        &self.children
    }

    pub fn hosted_view(&self) -> Option<&HostedView> {
        self.children.iter().find_map(|slot| match slot {
            GridSlot::Content(view) => Some(view),
            GridSlot::Indicator => None,
        })
    }

    /// Swaps the hosted content: the previous view (if any) leaves the
    /// slot, the new one enters at the front, and the indicator stack
    /// keeps its trailing position.
    pub fn set_hosted_view(&mut self, view: Option<HostedView>) {
        self.children
            .retain(|slot| !matches!(slot, GridSlot::Content(_)));
        if let Some(view) = view {
            self.children.insert(0, GridSlot::Content(view));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacing_content_keeps_exactly_one_hosted_view() {
        let mut grid = Grid::new(Color::TRANSPARENT);
        let first = HostedView::new("first");
        let second = HostedView::new("second");

        grid.set_hosted_view(Some(first));
        grid.set_hosted_view(Some(second.clone()));

        assert_eq!(grid.children().len(), 2);
        let hosted = grid.hosted_view().unwrap();
        assert!(hosted.ptr_eq(&second));
    }

    #[test]
    fn content_is_ordered_before_the_indicator() {
        let mut grid = Grid::new(Color::TRANSPARENT);
        grid.set_hosted_view(Some(HostedView::new(42_u32)));

        assert!(matches!(grid.children()[0], GridSlot::Content(_)));
        assert!(matches!(grid.children()[1], GridSlot::Indicator));
    }

    #[test]
    fn clearing_content_leaves_only_the_indicator() {
        let mut grid = Grid::new(Color::TRANSPARENT);
        grid.set_hosted_view(Some(HostedView::new(())));
        grid.set_hosted_view(None);

        assert!(grid.hosted_view().is_none());
        assert_eq!(grid.children().len(), 1);
    }
}
