mod demo_flow;
mod key_bindings;
