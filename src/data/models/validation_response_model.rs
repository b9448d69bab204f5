/// Raw answer from the `/cgi-bin/webscr` endpoint. PayPal replies with a bare
/// `text/html` body of either `VERIFIED` or `INVALID`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResponseModel {
    pub status: u16,
    pub body: String,
}
