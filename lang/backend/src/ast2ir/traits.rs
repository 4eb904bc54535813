use crate::result::BackendResult;

pub trait ToIR {
    type Target;

    fn to_ir(&self) -> BackendResult<Self::Target>;
}

impl<T: ToIR> ToIR for Option<T> {
    type Target = Option<T::Target>;

    fn to_ir(&self) -> BackendResult<Self::Target> {
        self.as_ref().map(|x| x.to_ir()).transpose()
    }
}

impl<T: ToIR> ToIR for Vec<T> {
    type Target = Vec<T::Target>;

    fn to_ir(&self) -> BackendResult<Self::Target> {
        self.iter().map(|x| x.to_ir()).collect()
    }
}

impl<T: ToIR> ToIR for std::rc::Rc<T> {
    type Target = T::Target;

    fn to_ir(&self) -> BackendResult<Self::Target> {
        (**self).to_ir()
    }
}
