use std::borrow::Cow;

use percent_encoding::percent_decode;

/// Notification fields decoded from the raw POST body delivered by PayPal.
///
/// Keys and values are kept as raw bytes. PayPal encodes notifications in the
/// account's configured charset (`windows-1252` unless changed), and the echo
/// has to reproduce those bytes exactly.
///
/// Fields keep the order in which they first appeared. A key that appears
/// more than once keeps its first position but takes the last value, the same
/// way a form decoder collecting into a map would.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpnNotification {
    fields: Vec<(Vec<u8>, Vec<u8>)>,
}

impl IpnNotification {
    /// Decodes an `application/x-www-form-urlencoded` body.
    ///
    /// Segments that do not consist of exactly one `key=value` pair (no `=`,
    /// or an ambiguous second `=`) are skipped.
    pub fn from_form_bytes(body: &[u8]) -> Self {
        let mut notification = Self::default();
        for segment in body.split(|b| *b == b'&') {
            let mut parts = segment.split(|b| *b == b'=');
            if let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) {
                notification.insert(decode_component(key), decode_component(value));
            }
        }
        notification
    }

    /// Value of `key` as text. Bytes that are not valid UTF-8 are replaced;
    /// use [`IpnNotification::get_bytes`] for the exact value.
    pub fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get_bytes(key).map(String::from_utf8_lossy)
    }

    pub fn get_bytes(&self, key: &str) -> Option<&[u8]> {
        self.fields
            .iter()
            .find(|(k, _)| k.as_slice() == key.as_bytes())
            .map(|(_, v)| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw decoded `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.fields.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    fn insert(&mut self, key: Vec<u8>, value: Vec<u8>) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }
}

impl<K: Into<Vec<u8>>, V: Into<Vec<u8>>> FromIterator<(K, V)> for IpnNotification {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut notification = Self::default();
        for (key, value) in iter {
            notification.insert(key.into(), value.into());
        }
        notification
    }
}

/// `+` is a space, `%XX` is a byte. Malformed escapes are kept verbatim.
fn decode_component(component: &[u8]) -> Vec<u8> {
    let plus_as_space: Vec<u8> = component
        .iter()
        .map(|b| if *b == b'+' { b' ' } else { *b })
        .collect();
    percent_decode(&plus_as_space).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_fields_in_order() {
        let n = IpnNotification::from_form_bytes(b"txn_id=61E67681CH3238416&payment_status=Completed");
        let fields: Vec<_> = n.iter().collect();
        assert_eq!(
            fields,
            vec![
                (&b"txn_id"[..], &b"61E67681CH3238416"[..]),
                (&b"payment_status"[..], &b"Completed"[..]),
            ]
        );
    }

    #[test]
    fn test_percent_and_plus_decoding() {
        let n = IpnNotification::from_form_bytes(
            b"payer_email=buyer%40example.com&item_name=Blue+Widget&memo=caf%C3%A9",
        );
        assert_eq!(n.get("payer_email").as_deref(), Some("buyer@example.com"));
        assert_eq!(n.get("item_name").as_deref(), Some("Blue Widget"));
        assert_eq!(n.get("memo").as_deref(), Some("café"));
    }

    #[test]
    fn test_windows_1252_value_kept_as_bytes() {
        let n = IpnNotification::from_form_bytes(b"first_name=Jos%E9&charset=windows-1252");
        assert_eq!(n.get_bytes("first_name"), Some(&b"Jos\xe9"[..]));
        assert_eq!(n.get("first_name").as_deref(), Some("Jos\u{fffd}"));
        assert_eq!(n.get("charset").as_deref(), Some("windows-1252"));
    }

    #[test]
    fn test_malformed_escape_is_kept_verbatim() {
        let n = IpnNotification::from_form_bytes(b"memo=100%25+off%zz");
        assert_eq!(n.get("memo").as_deref(), Some("100% off%zz"));
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let n = IpnNotification::from_form_bytes(b"a=1&b=x&a=2");
        assert_eq!(n.len(), 2);
        assert_eq!(n.get("a").as_deref(), Some("2"));
        // First occurrence keeps its position.
        assert_eq!(n.iter().next(), Some((&b"a"[..], &b"2"[..])));
    }

    #[test]
    fn test_malformed_segments_are_skipped() {
        let n = IpnNotification::from_form_bytes(b"novalue&a=1&b=2=3&&c=");
        assert_eq!(n.len(), 2);
        assert_eq!(n.get("novalue"), None);
        assert_eq!(n.get("b"), None);
        assert_eq!(n.get("a").as_deref(), Some("1"));
        assert_eq!(n.get("c").as_deref(), Some(""));
    }

    #[test]
    fn test_empty_body() {
        assert!(IpnNotification::from_form_bytes(b"").is_empty());
    }

    #[test]
    fn test_from_iter_applies_last_write_wins() {
        let n: IpnNotification = [("a", "1"), ("a", "2")].into_iter().collect();
        assert_eq!(n.len(), 1);
        assert_eq!(n.get("a").as_deref(), Some("2"));
    }
}
