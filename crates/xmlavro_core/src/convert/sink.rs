use crate::convert::{Result, Value};

/// Consumer of completed values.
///
/// Called synchronously once per finalized level, in element closing order.
/// Returning an error aborts the document.
pub trait Sink {
	/// Take ownership of one completed value.
	fn accept(&mut self, value: Value) -> Result<()>;
}

impl Sink for Vec<Value> {
	fn accept(&mut self, value: Value) -> Result<()> {
		self.push(value);
		Ok(())
	}
}

impl<F> Sink for F
where
	F: FnMut(Value),
{
	fn accept(&mut self, value: Value) -> Result<()> {
		self(value);
		Ok(())
	}
}
