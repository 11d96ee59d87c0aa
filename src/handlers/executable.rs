use crate::handlers::HandlerError;
use crate::store::Store;

pub trait Executable {
    type Output;

    fn exec(self, store: Store) -> Result<Self::Output, HandlerError>;
}
