use super::{NodeId, NodeKind, Request};
use crate::{error::Error, wire};

/// Parameters of the remote `list` operation, which returns the complete
/// directory snapshot in one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub inode: NodeId,
}

impl From<List> for Request {
    fn from(list: List) -> Self {
        Self {
            operation: "list",
            params: vec![("inode", list.inode.to_string())],
        }
    }
}

/// One entry decoded from a `list` response line. Names arrive as raw display
/// bytes; the transport encoding is never applied on this side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: Vec<u8>,
    pub kind: NodeKind,
    pub id: NodeId,
}

/// Decoded `list` snapshot: line 1 is the decimal entry count `N`, lines
/// `2..N+1` are `"<type-char> <decimal-id> <name>"`. Only the first two
/// fields are split; the name keeps any spaces verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub entries: Vec<DirEntry>,
}

fn parse_line(line: &[u8]) -> Result<DirEntry, Error> {
    let (tag, rest) = match line {
        [tag, b' ', rest @ ..] => (*tag, rest),
        _ => {
            return Err(Error::Protocol(format!(
                "listing line {:?} has no type field",
                String::from_utf8_lossy(line)
            )))
        }
    };

    let separator = rest.iter().position(|b| *b == b' ').ok_or_else(|| {
        Error::Protocol(format!(
            "listing line {:?} has no identifier field",
            String::from_utf8_lossy(line)
        ))
    })?;

    Ok(DirEntry {
        name: rest[separator + 1..].to_vec(),
        kind: NodeKind::from_tag(tag),
        id: wire::decimal(&rest[..separator])?,
    })
}

impl TryFrom<&[u8]> for Listing {
    type Error = Error;

    fn try_from(payload: &[u8]) -> Result<Self, Self::Error> {
        let mut lines = payload.split(|b| *b == b'\n');

        let count = wire::decimal(
            lines
                .next()
                .ok_or_else(|| Error::Protocol("empty listing response".to_owned()))?,
        )?;

        // The count is untrusted input; pre-sizing from it could abort the
        // process before any line is validated.
        let mut entries = Vec::new();
        for _ in 0..count {
            let line = lines
                .next()
                .filter(|line| !line.is_empty())
                .ok_or_else(|| Error::Protocol("listing shorter than its count".to_owned()))?;

            entries.push(parse_line(line)?);
        }

        Ok(Self { entries })
    }
}
