use crate::storage::scene::SharedMapScene;
use crate::storage::sockets::HashMapClientSocketsStorage;

#[derive(Clone, Default)]
pub struct AppContext {
    pub scene: SharedMapScene,
    pub sockets: HashMapClientSocketsStorage,
}

pub fn init() -> AppContext {
    AppContext::default()
}
