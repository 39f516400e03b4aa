//! `boardlist` binary: fetch the board list once and print it.

use boardlist::components::board_list::BoardList;
use boardlist::config::ClientConfig;
use boardlist::net::api::HttpBoardsApi;
use boardlist::state::store::Store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ClientConfig::from_env()?;
    let api = HttpBoardsApi::new(&config)?;
    tracing::info!(url = api.boards_url(), "board list starting");

    let store = Store::new();
    let board_list = BoardList::new(store.clone());
    board_list.mount(&api).await;

    print!("{}", board_list.render());
    Ok(())
}
