/// Generates consuming `field(self, value) -> Self` setters for the optional
/// members of a payload struct.
macro_rules! optional_setters {
    ($payload:ident { $($field:ident: $field_type:ty),* $(,)? }) => {
        impl $payload {
            $(
                pub fn $field(mut self, $field: impl Into<$field_type>) -> Self {
                    self.$field = Some($field.into());
                    self
                }
            )*
        }
    };
}
