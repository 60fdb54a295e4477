use std::{cell::RefCell, fmt, rc::Rc};

/// Shared handle to a device state record.
///
/// The driver's event handlers and its consumers hold handles to the same
/// record. Consumers read through [`state`](Self::state), which returns a
/// snapshot, so no borrow of the record outlives the call and every event
/// update lands. `Rc` keeps the record on one thread.
pub struct DeviceCell<T>(Rc<RefCell<T>>);

impl<T> DeviceCell<T> {
    pub(crate) fn new(device: T) -> Self {
        Self(Rc::new(RefCell::new(device)))
    }

    /// Copy of the current device state.
    ///
    /// Later events do not change a snapshot already taken; call again
    /// for fresh values.
    #[must_use]
    pub fn state(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().clone()
    }

    /// Whether two handles refer to the same record.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Apply `update` to the record.
    ///
    /// Borrows never escape this type, so the record is free whenever a
    /// handler runs.
    pub(crate) fn update(&self, update: impl FnOnce(&mut T)) {
        let mut device = self.0.borrow_mut();
        update(&mut *device);
    }
}

impl<T> Clone for DeviceCell<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for DeviceCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("DeviceCell");
        let _ = match self.0.try_borrow() {
            Ok(device) => tuple.field(&*device),
            Err(_) => tuple.field(&format_args!("<updating>")),
        };
        tuple.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_record() {
        let cell = DeviceCell::new(1_u32);
        let other = cell.clone();
        other.update(|n| *n = 5);
        assert_eq!(cell.state(), 5);
        assert!(cell.ptr_eq(&other));
    }

    #[test]
    fn snapshot_does_not_block_updates() {
        let cell = DeviceCell::new(vec![1_u32]);
        let before = cell.state();
        cell.update(|v| v.push(2));
        assert_eq!(before, vec![1]);
        assert_eq!(cell.state(), vec![1, 2]);
    }

    #[test]
    fn debug_during_update_does_not_panic() {
        let cell = DeviceCell::new(7_u32);
        let inner = cell.clone();
        let mut seen = String::new();
        cell.update(|n| {
            seen = format!("{inner:?}");
            *n = 8;
        });
        assert_eq!(seen, "DeviceCell(<updating>)");
        assert_eq!(format!("{cell:?}"), "DeviceCell(8)");
    }
}
