use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Cheap-clone handle around a host-application view.
///
/// The widget displays the view but never owns it: replacing the hosted
/// content drops this handle, not the view the host still holds elsewhere.
#[derive(Clone)]
pub struct HostedView(Rc<dyn Any>);

impl HostedView {
    pub fn new<T: 'static>(view: T) -> Self {
        Self(Rc::new(view))
    }

    /// Identity comparison: two handles refer to the same view iff they
    /// share storage.
    pub fn ptr_eq(&self, other: &HostedView) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for HostedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HostedView")
            .field(&Rc::as_ptr(&self.0))
            .finish()
    }
}
