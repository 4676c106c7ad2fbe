/// Generate accessor functions for the global UI signals.
///
/// Usage:
/// `global_signals! {
///     pub fn1 => field1: Type1,
///     fn2 => field2: Type2,
/// }`
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}
