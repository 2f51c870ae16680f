//! Compile-time check of whether a type implements `NotificationService`.
//!
//! `Probe<T>::IMPLEMENTS` resolves to the inherent constant when the bound
//! holds and falls back to the blanket trait constant otherwise. It must be
//! used on concrete types, through the `implements_notification_service!` macro.
#![allow(dead_code)]

use notifier::core::NotificationService;
use std::marker::PhantomData;

pub trait DoesNotImplement {
    const IMPLEMENTS: bool = false;
}

impl<T: ?Sized> DoesNotImplement for T {}

pub struct Probe<T: ?Sized>(PhantomData<T>);

impl<T: ?Sized + NotificationService> Probe<T> {
    pub const IMPLEMENTS: bool = true;
}

#[macro_export]
macro_rules! implements_notification_service {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::helpers::trait_probe::{DoesNotImplement, Probe};
        <Probe<$ty>>::IMPLEMENTS
    }};
}
