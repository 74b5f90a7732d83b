mod destroy;
