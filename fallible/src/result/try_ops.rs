use core::{
    convert::Infallible,
    ops::{ControlFlow, FromResidual, Residual, Try},
    result::Result as CoreResult,
};

use crate::error_box::ErrorBox;

use super::Result::{self, Failure, Success};

impl<T, E> Try for Result<T, E> {
    type Output = T;
    type Residual = Result<Infallible, E>;

    fn from_output(output: Self::Output) -> Self {
        Success(output)
    }

    fn branch(self) -> ControlFlow<Self::Residual, Self::Output> {
        match self {
            Success(value) => ControlFlow::Continue(value),
            Failure(error) => ControlFlow::Break(Failure(error)),
        }
    }
}

impl<T, E> Residual<T> for Result<Infallible, E> {
    type TryType = Result<T, E>;
}

impl<T, E, F: From<E>> FromResidual<Result<Infallible, E>> for Result<T, F> {
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        match residual {
            Failure(error) => Failure(error.map(F::from)),
            Success(never) => match never {},
        }
    }
}

impl<T, E, F: From<E>> FromResidual<CoreResult<Infallible, E>> for Result<T, F> {
    fn from_residual(residual: CoreResult<Infallible, E>) -> Self {
        match residual {
            Err(error) => Failure(ErrorBox::new(F::from(error))),
            Ok(never) => match never {},
        }
    }
}
