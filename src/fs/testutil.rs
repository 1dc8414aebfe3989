//! Remote-call doubles shared by the fs-level tests.

use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;

use crate::{
    error::{Error, NetFsResult},
    protocol::{NodeId, NodeKind, Request, ROOT_NODE_ID},
    remote::{RemoteClient, Reply},
};

/// Replays a fixed queue of replies and records every request it saw.
pub(crate) struct ScriptedRemote {
    replies: Mutex<Vec<Reply>>,
    calls: Mutex<Vec<Request>>,
}

impl ScriptedRemote {
    pub fn replying(mut replies: Vec<Reply>) -> Self {
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Request> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteClient for ScriptedRemote {
    async fn call(&self, request: Request) -> NetFsResult<Reply> {
        self.calls.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop()
            .ok_or_else(|| Error::Transport("scripted remote exhausted".to_owned()))
    }
}

struct Node {
    kind: NodeKind,
    /// Transport-encoded name -> child id.
    children: HashMap<String, NodeId>,
    /// Content as received, still transport-encoded.
    content: String,
    display_name: Vec<u8>,
}

/// In-memory rendition of the remote directory service, faithful to the wire
/// grammar: it stores encoded names as opaque keys and answers `read` with
/// the decoded raw bytes.
pub(crate) struct FakeService {
    state: Mutex<FakeState>,
}

struct FakeState {
    next_id: NodeId,
    nodes: HashMap<NodeId, Node>,
}

const FAILED: i32 = -404;

fn failure() -> Reply {
    Reply {
        status: FAILED,
        payload: Bytes::new(),
    }
}

fn success(payload: Vec<u8>) -> Reply {
    Reply {
        status: 0,
        payload: Bytes::from(payload),
    }
}

fn decode(encoded: &str) -> Vec<u8> {
    encoded
        .as_bytes()
        .chunks(3)
        .map(|chunk| {
            u8::from_str_radix(std::str::from_utf8(&chunk[1..]).unwrap(), 16).unwrap()
        })
        .collect()
}

fn param<'a>(request: &'a Request, key: &str) -> &'a str {
    request
        .params
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}

impl FakeService {
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        let _ = nodes.insert(
            ROOT_NODE_ID,
            Node {
                kind: NodeKind::Directory,
                children: HashMap::new(),
                content: String::new(),
                display_name: b"/".to_vec(),
            },
        );

        Self {
            state: Mutex::new(FakeState {
                next_id: ROOT_NODE_ID + 1,
                nodes,
            }),
        }
    }
}

impl FakeState {
    fn lookup(&self, request: &Request) -> Reply {
        let parent: NodeId = match param(request, "inode").parse() {
            Ok(id) => id,
            Err(_) => return failure(),
        };

        let Some(child) = self
            .nodes
            .get(&parent)
            .and_then(|node| node.children.get(param(request, "name")))
        else {
            return failure();
        };

        let tag = match self.nodes[child].kind {
            NodeKind::File => 'f',
            NodeKind::Directory => 'd',
        };
        success(format!("{tag}{child}").into_bytes())
    }

    fn create(&mut self, request: &Request) -> Reply {
        let Ok(parent) = param(request, "parent_inode").parse::<NodeId>() else {
            return failure();
        };
        let name = param(request, "name").to_owned();
        let kind = match param(request, "create_type") {
            "f" => NodeKind::File,
            "d" => NodeKind::Directory,
            _ => return failure(),
        };

        if !self.nodes.contains_key(&parent) {
            return failure();
        }
        if self.nodes[&parent].children.contains_key(&name) {
            return failure();
        }

        let id = self.next_id;
        self.next_id += 1;

        let _ = self.nodes.insert(
            id,
            Node {
                kind,
                children: HashMap::new(),
                content: String::new(),
                display_name: decode(&name),
            },
        );
        if let Some(parent) = self.nodes.get_mut(&parent) {
            let _ = parent.children.insert(name, id);
        }

        success(id.to_string().into_bytes())
    }

    fn unlink(&mut self, request: &Request) -> Reply {
        let Ok(parent) = param(request, "parent_inode").parse::<NodeId>() else {
            return failure();
        };
        let name = param(request, "name").to_owned();

        let Some(id) = self
            .nodes
            .get(&parent)
            .and_then(|node| node.children.get(&name))
            .copied()
        else {
            return failure();
        };

        let tag = match self.nodes[&id].kind {
            NodeKind::File => "f",
            NodeKind::Directory => "d",
        };
        if tag != param(request, "delete_type") {
            return failure();
        }
        if !self.nodes[&id].children.is_empty() {
            return failure();
        }

        let _ = self.nodes.remove(&id);
        if let Some(parent) = self.nodes.get_mut(&parent) {
            let _ = parent.children.remove(&name);
        }

        success(Vec::new())
    }

    fn list(&self, request: &Request) -> Reply {
        let Ok(inode) = param(request, "inode").parse::<NodeId>() else {
            return failure();
        };
        let Some(node) = self.nodes.get(&inode) else {
            return failure();
        };
        if node.kind != NodeKind::Directory {
            return failure();
        }

        let mut body = format!("{}\n", node.children.len()).into_bytes();
        for id in node.children.values() {
            let child = &self.nodes[id];
            let tag = match child.kind {
                NodeKind::File => 'f',
                NodeKind::Directory => 'd',
            };
            body.extend_from_slice(format!("{tag} {id} ").as_bytes());
            body.extend_from_slice(&child.display_name);
            body.push(b'\n');
        }

        success(body)
    }

    fn read_size(&self, request: &Request) -> Reply {
        match param(request, "inode")
            .parse::<NodeId>()
            .ok()
            .and_then(|id| self.nodes.get(&id))
        {
            Some(node) => success(decode(&node.content).len().to_string().into_bytes()),
            None => failure(),
        }
    }

    fn read(&self, request: &Request) -> Reply {
        match param(request, "inode")
            .parse::<NodeId>()
            .ok()
            .and_then(|id| self.nodes.get(&id))
        {
            Some(node) => success(decode(&node.content)),
            None => failure(),
        }
    }

    fn write(&mut self, request: &Request) -> Reply {
        let content = param(request, "content").to_owned();
        match param(request, "inode")
            .parse::<NodeId>()
            .ok()
            .and_then(|id| self.nodes.get_mut(&id))
        {
            Some(node) => {
                node.content = content;
                success(Vec::new())
            }
            None => failure(),
        }
    }
}

#[async_trait]
impl RemoteClient for FakeService {
    async fn call(&self, request: Request) -> NetFsResult<Reply> {
        let mut state = self.state.lock().unwrap();

        Ok(match request.operation {
            "lookup" => state.lookup(&request),
            "create" => state.create(&request),
            "unlink" => state.unlink(&request),
            "list" => state.list(&request),
            "read_size" => state.read_size(&request),
            "read" => state.read(&request),
            "write" => state.write(&request),
            _ => failure(),
        })
    }
}
