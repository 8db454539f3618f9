mod regular_dijkstra;
mod state;
mod traced_dijkstra;
