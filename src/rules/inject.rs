const HEAD_CLOSE: &str = "</head>";

/// Outcome of injecting the config script tag into HTML content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Injection {
	/// The tag was inserted; holds the new content.
	Inserted(String),

	/// The document already references the script.
	AlreadyPresent,

	/// No `</head>` to insert before.
	HeadTagMissing,
}

/// The `<script>` line inserted before `</head>`.
pub fn script_tag(script: &str) -> String {
	format!("    <script src=\"{script}\"></script>\n")
}

/// Whether `content` already includes `script` via a double- or single-quoted `src`.
pub fn references_script(content: &str, script: &str) -> bool {
	content.contains(&format!("src=\"{script}\"")) || content.contains(&format!("src='{script}'"))
}

/// Insert a script include for `script` before the first `</head>`.
pub fn inject_config_script(content: &str, script: &str) -> Injection {
	if references_script(content, script) {
		return Injection::AlreadyPresent;
	}

	let Some(pos) = content.find(HEAD_CLOSE) else {
		return Injection::HeadTagMissing;
	};

	let tag = script_tag(script);
	let mut out = String::with_capacity(content.len() + tag.len());
	out.push_str(&content[..pos]);
	out.push_str(&tag);
	out.push_str(&content[pos..]);
	Injection::Inserted(out)
}
