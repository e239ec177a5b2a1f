/*! Corpus file naming.

Domains are canonicalized by dropping `www.` and a known top-level domain,
pages by flattening their path and query into a filename.
This is lossy on purpose: different URLs may share a directory or a file.
!*/
use url::Url;

/// Stripped from the end of a host. The leftmost match wins (`x.blogspot.com` gives `x`).
const TLD_SUFFIXES: [&str; 6] = ["com", "org", "edu", "gov", "py", "blogspot.com"];

/// Stripped from the end of a page path.
const PAGE_EXTENSIONS: [&str; 3] = [".html", ".php", ".htm"];

/// Host and port (if not the scheme's default) of a URL.
pub fn netloc(url: &Url) -> Option<String> {
    url.host_str().map(|host| match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// `netloc` without a leading `www.`, TLD kept.
pub fn full_domain(netloc: &str) -> &str {
    netloc.strip_prefix("www.").unwrap_or(netloc)
}

/// `netloc` without a leading `www.` and without its known TLD.
pub fn clean_domain(netloc: &str) -> String {
    let domain = full_domain(netloc);
    for (idx, _) in domain.match_indices('.') {
        if TLD_SUFFIXES.contains(&&domain[idx + 1..]) {
            return domain[..idx].to_string();
        }
    }
    domain.to_string()
}

/// `key_value` for each non-empty query value, keys in first-seen order.
fn query_parts(url: &Url) -> Vec<String> {
    let mut params: Vec<(String, Vec<String>)> = Vec::new();
    for (key, value) in url.query_pairs() {
        if value.is_empty() {
            continue;
        }
        match params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value.into_owned()),
            None => params.push((key.into_owned(), vec![value.into_owned()])),
        }
    }

    params
        .into_iter()
        .flat_map(|(key, values)| values.into_iter().map(move |v| format!("{key}_{v}")))
        .collect()
}

/// Replace anything but alphanumerics, `_` and `-` by `_`, collapse and trim underscores.
fn sanitize(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if c.is_alphanumeric() || c == '_' || c == '-' {
            c
        } else {
            '_'
        };
        if c == '_' && sanitized.ends_with('_') {
            continue;
        }
        sanitized.push(c);
    }
    sanitized.trim_matches('_').to_string()
}

/// Filename of the corpus file of a page, `.txt` included.
pub fn clean_page_filename(url: &Url) -> String {
    let path = url.path();
    let mut filename = if path.is_empty() || path == "/" {
        "index".to_string()
    } else {
        let flat = path.trim_matches('/').replace('/', "_");
        PAGE_EXTENSIONS
            .iter()
            .find_map(|ext| flat.strip_suffix(ext))
            .map(str::to_string)
            .unwrap_or(flat)
    };

    let parts = query_parts(url);
    if !parts.is_empty() {
        filename.push('_');
        filename.push_str(&parts.join("_"));
    }

    let filename = sanitize(&filename);
    if filename.is_empty() {
        "index.txt".to_string()
    } else {
        format!("{filename}.txt")
    }
}
