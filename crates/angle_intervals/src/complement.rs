pub trait Complement {
    type Output;
    fn complement(&self) -> Self::Output;
}
