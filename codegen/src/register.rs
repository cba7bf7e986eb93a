/// Register implements the methods for a register addressable by generated
/// instructions.
pub trait Register
where
    Self: Copy,
{
    fn id(&self) -> &'static str;
}
