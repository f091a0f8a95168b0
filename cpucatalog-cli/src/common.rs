use erased_serde::Serializer;

pub trait Run {
    fn run(&self, serializer: &mut dyn Serializer) -> anyhow::Result<()>;
}

#[macro_export]
macro_rules! run_impl_enum {
    ($i:ident, $self:ident, $ser:ident, $b:block) => {
        impl $crate::common::Run for $i {
            fn run(&$self, $ser: &mut dyn erased_serde::Serializer) -> anyhow::Result<()> {
                $b

                Ok(())
            }
        }
    }
}

#[macro_export]
macro_rules! run_impl_struct {
    ($i:ident, $b:ident) => {
        impl $crate::common::Run for $i {
            fn run(&self, serializer: &mut dyn erased_serde::Serializer) -> anyhow::Result<()> {
                $crate::common::Run::run(&self.$b, serializer)
            }
        }
    };
}
