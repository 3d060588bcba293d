pub trait ResultExt<T, E> {
	/// Discards the error after logging it, prefixed by what was being attempted.
	fn ok_or_log(self, context: &str) -> Option<T>
	where
		E: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log(self, context: &str) -> Option<T>
	where
		E: std::fmt::Display,
	{
		self
			.inspect_err(|err| tracing::error!(error = %err, "{context}"))
			.ok()
	}
}
